//! Session Authentication
//!
//! Session tokens arrive in the `session` cookie or as a Bearer token.
//! Flash notices ride a short-lived `flash` cookie across one redirect.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use interviewer::Session;

use crate::AppState;

pub const SESSION_COOKIE: &str = "session";
pub const FLASH_COOKIE: &str = "flash";

/// Logged-in user, inserted into request extensions by `require_login`
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Session);

/// Read a cookie value from the request headers
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

/// Session token from the cookie, falling back to `Authorization: Bearer`
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = read_cookie(headers, SESSION_COOKIE).filter(|t| !t.is_empty()) {
        return Some(token);
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

fn cookie(name: &str, value: &str, max_age: Option<i64>, secure: bool) -> String {
    let mut cookie = format!("{name}={value}; Path=/; HttpOnly; SameSite=Lax");
    if let Some(max_age) = max_age {
        cookie.push_str(&format!("; Max-Age={max_age}"));
    }
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value carrying a session token
pub fn session_cookie(session: &Session, secure: bool) -> String {
    let max_age = session
        .expires_at
        .map(|expires_at| (expires_at - session.created_at).num_seconds().max(0));
    cookie(SESSION_COOKIE, &session.token, max_age, secure)
}

/// `Set-Cookie` value that deletes `name`
pub fn clear_cookie(name: &str, secure: bool) -> String {
    cookie(name, "", Some(0), secure)
}

/// Category of a flash notice, used as a CSS class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Danger,
    Info,
}

impl FlashKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Danger => "danger",
            FlashKind::Info => "info",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "success" => Some(FlashKind::Success),
            "danger" => Some(FlashKind::Danger),
            "info" => Some(FlashKind::Info),
            _ => None,
        }
    }
}

/// One-shot notice shown on the next rendered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn new(kind: FlashKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// `Set-Cookie` value carrying this notice
    pub fn to_cookie(&self, secure: bool) -> String {
        let value = format!(
            "{}:{}",
            self.kind.as_str(),
            urlencoding::encode(&self.message)
        );
        cookie(FLASH_COOKIE, &value, Some(60), secure)
    }

    /// Decode the flash cookie, if any
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let raw = read_cookie(headers, FLASH_COOKIE)?;
        let (kind, message) = raw.split_once(':')?;
        Some(Self {
            kind: FlashKind::parse(kind)?,
            message: urlencoding::decode(message).ok()?.into_owned(),
        })
    }
}

/// Login gate: redirects anonymous requests to `/login`
pub async fn require_login(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = session_token(request.headers()) else {
        return Redirect::to("/login").into_response();
    };

    match state.auth.resolve(&token).await {
        Ok(Some(session)) => {
            request.extensions_mut().insert(CurrentUser(session));
            next.run(request).await
        }
        Ok(None) => {
            tracing::warn!("Unknown or expired session");
            Redirect::to("/login").into_response()
        }
        Err(e) => {
            tracing::warn!("Session lookup failed: {}", e);
            Redirect::to("/login").into_response()
        }
    }
}
