//! Application configuration
//!
//! Read from deployment secrets at startup.

use std::time::Duration;

use thiserror::Error;

use crate::adapters::mistral::{MistralConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mistral: MistralConfig,
    /// `None` keeps sessions until logout
    pub session_ttl: Option<chrono::Duration>,
    /// Add `Secure` to cookies (HTTPS deployments)
    pub secure_cookies: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mistral: MistralConfig::new(""),
            session_ttl: None,
            secure_cookies: false,
        }
    }
}

fn parse_secs(key: &'static str, value: String) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
        key,
        value,
        reason: e.to_string(),
    })
}

fn parse_bool(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value,
            reason: "expected a boolean".to_string(),
        }),
    }
}

impl AppConfig {
    /// Build from a key lookup (e.g. `SecretStore::get`)
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = match get("MISTRAL_API_KEY") {
            Some(key) if !key.is_empty() => key,
            _ => {
                tracing::warn!("⚠️  No MISTRAL_API_KEY set - interview endpoints will return provider errors");
                String::new()
            }
        };

        let timeout = get("UPSTREAM_TIMEOUT_SECS")
            .map(|v| parse_secs("UPSTREAM_TIMEOUT_SECS", v))
            .transpose()?
            .map(Duration::from_secs);

        let session_ttl = get("SESSION_TTL_SECS")
            .map(|v| {
                let secs = parse_secs("SESSION_TTL_SECS", v.clone())?;
                i64::try_from(secs)
                    .ok()
                    .and_then(chrono::Duration::try_seconds)
                    .ok_or(ConfigError::Invalid {
                        key: "SESSION_TTL_SECS",
                        value: v,
                        reason: "out of range".to_string(),
                    })
            })
            .transpose()?;

        let secure_cookies = get("SECURE_COOKIES")
            .map(|v| parse_bool("SECURE_COOKIES", v))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            mistral: MistralConfig {
                api_key,
                endpoint: get("MISTRAL_API_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
                model: get("MISTRAL_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                timeout,
            },
            session_ttl,
            secure_cookies,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.mistral.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.mistral.model, "mistral-medium");
        assert!(config.mistral.api_key.is_empty());
        assert!(config.mistral.timeout.is_none());
        assert!(config.session_ttl.is_none());
        assert!(!config.secure_cookies);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("MISTRAL_API_KEY", "k"),
            ("MISTRAL_API_URL", "http://localhost:1234/v1/chat/completions"),
            ("MISTRAL_MODEL", "mistral-small"),
            ("UPSTREAM_TIMEOUT_SECS", "30"),
            ("SESSION_TTL_SECS", "3600"),
            ("SECURE_COOKIES", "true"),
        ]))
        .unwrap();

        assert_eq!(config.mistral.api_key, "k");
        assert_eq!(config.mistral.model, "mistral-small");
        assert_eq!(config.mistral.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.session_ttl, Some(chrono::Duration::hours(1)));
        assert!(config.secure_cookies);
    }

    #[test]
    fn test_invalid_number_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("SESSION_TTL_SECS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("SESSION_TTL_SECS"));
    }
}
