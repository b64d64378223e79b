//! Auth Routes - registration, login, logout
//!
//! Form posts answered with redirects and flash notices.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};

use interviewer::DomainError;

use crate::auth::{clear_cookie, session_cookie, session_token, Flash, FlashKind, SESSION_COOKIE};
use crate::models::CredentialsForm;
use crate::routes::pages;
use crate::views;
use crate::AppState;

/// Redirect to `to`, leaving `flash` for the next page
fn redirect_with_flash(state: &AppState, to: &str, flash: Flash) -> Response {
    (
        AppendHeaders([(header::SET_COOKIE, flash.to_cookie(state.secure_cookies))]),
        Redirect::to(to),
    )
        .into_response()
}

fn internal_error(e: DomainError) -> Response {
    tracing::error!("Internal error: {}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
}

pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> Response {
    match state.auth.register(&form.username, &form.password).await {
        Ok(_) => redirect_with_flash(
            &state,
            "/login",
            Flash::new(FlashKind::Success, "Registration successful!"),
        ),
        Err(DomainError::DuplicateUsername(_)) => redirect_with_flash(
            &state,
            "/register",
            Flash::new(FlashKind::Danger, "Username already exists!"),
        ),
        Err(DomainError::Validation(message)) => {
            redirect_with_flash(&state, "/register", Flash::new(FlashKind::Danger, message))
        }
        Err(e) => internal_error(e),
    }
}

pub async fn login(State(state): State<AppState>, Form(form): Form<CredentialsForm>) -> Response {
    match state.auth.login(&form.username, &form.password).await {
        Ok(session) => {
            let flash = Flash::new(FlashKind::Success, "Login successful!");
            (
                AppendHeaders([
                    (
                        header::SET_COOKIE,
                        session_cookie(&session, state.secure_cookies),
                    ),
                    (header::SET_COOKIE, flash.to_cookie(state.secure_cookies)),
                ]),
                Redirect::to("/"),
            )
                .into_response()
        }
        Err(DomainError::InvalidCredentials) => {
            let flash = Flash::new(FlashKind::Danger, "Invalid credentials, please try again.");
            Html(views::login_page(Some(&flash))).into_response()
        }
        Err(e) => internal_error(e),
    }
}

pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = session_token(&headers) {
        if let Err(e) = state.auth.logout(&token).await {
            return internal_error(e);
        }
    }

    let flash = Flash::new(FlashKind::Info, "You have been logged out.");
    (
        AppendHeaders([
            (
                header::SET_COOKIE,
                clear_cookie(SESSION_COOKIE, state.secure_cookies),
            ),
            (header::SET_COOKIE, flash.to_cookie(state.secure_cookies)),
        ]),
        Redirect::to("/login"),
    )
        .into_response()
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", get(pages::register_page).post(register))
        .route("/login", get(pages::login_page).post(login))
        .route("/logout", get(logout))
}
