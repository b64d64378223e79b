//! Login / registration form bodies

use serde::Deserialize;

/// `application/x-www-form-urlencoded` username + password
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}
