//! Page Routes - server-rendered HTML

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{AppendHeaders, Html, IntoResponse, Response},
    routing::get,
    Extension, Router,
};

use crate::auth::{clear_cookie, CurrentUser, Flash, FLASH_COOKIE};
use crate::views;
use crate::AppState;

/// Render a page, consuming any pending flash notice
fn render(
    state: &AppState,
    headers: &HeaderMap,
    page: impl FnOnce(Option<&Flash>) -> String,
) -> Response {
    match Flash::from_headers(headers) {
        Some(flash) => (
            AppendHeaders([(
                header::SET_COOKIE,
                clear_cookie(FLASH_COOKIE, state.secure_cookies),
            )]),
            Html(page(Some(&flash))),
        )
            .into_response(),
        None => Html(page(None)).into_response(),
    }
}

pub async fn login_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    render(&state, &headers, views::login_page)
}

pub async fn register_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    render(&state, &headers, views::register_page)
}

/// Practice page; mounted behind `require_login`
pub async fn index(
    State(state): State<AppState>,
    Extension(CurrentUser(session)): Extension<CurrentUser>,
    headers: HeaderMap,
) -> Response {
    render(&state, &headers, |flash| {
        views::index_page(&session.username, flash)
    })
}

/// Routes that require a logged-in session
pub fn protected_router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
