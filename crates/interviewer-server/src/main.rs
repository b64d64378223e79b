use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use interviewer::LlmProvider;

mod adapters;
mod application;
mod auth;
mod config;
mod models;
mod routes;
mod views;

use adapters::{
    Argon2PasswordHasher, InMemorySessionRepository, InMemoryUserRepository, MistralClient,
};
use application::{AuthService, InterviewService};
use config::AppConfig;

/// Type aliases for application services with concrete adapters
pub type AppAuthService =
    AuthService<InMemoryUserRepository, InMemorySessionRepository, Argon2PasswordHasher>;
pub type AppInterviewService = InterviewService<dyn LlmProvider>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AppAuthService>,
    pub interview: Arc<AppInterviewService>,
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(config: &AppConfig, provider: Arc<dyn LlmProvider>) -> Self {
        let auth = AuthService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemorySessionRepository::new()),
            Arc::new(Argon2PasswordHasher::new()),
        )
        .with_session_ttl(config.session_ttl);

        Self {
            auth: Arc::new(auth),
            interview: Arc::new(InterviewService::new(provider)),
            secure_cookies: config.secure_cookies,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

/// Service liveness
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is running", body = HealthCheck)),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Interviewer API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Assemble every route with shared state
pub fn build_router(state: AppState) -> Router {
    // Login-gated pages
    let protected_routes = routes::pages::protected_router().layer(
        middleware::from_fn_with_state(state.clone(), auth::require_login),
    );

    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::auth::router())
        .merge(routes::interview::router())
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Periodically drop expired sessions (only when a TTL is configured)
fn spawn_session_sweeper(state: AppState, every: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            match state.auth.purge_expired_sessions().await {
                Ok(0) => {}
                Ok(n) => tracing::info!("Purged {} expired sessions", n),
                Err(e) => tracing::warn!("Session purge failed: {}", e),
            }
        }
    })
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🎤 Interviewer initializing...");

    let config = AppConfig::from_lookup(|key| secrets.get(key)).map_err(anyhow::Error::from)?;

    let provider = MistralClient::new(config.mistral.clone()).map_err(anyhow::Error::from)?;
    tracing::info!(
        "🤖 Mistral client ready (model: {}, endpoint: {})",
        config.mistral.model,
        provider.endpoint()
    );

    let state = AppState::new(&config, Arc::new(provider));

    match config.session_ttl {
        Some(ttl) => {
            spawn_session_sweeper(state.clone(), Duration::from_secs(60));
            tracing::info!("🔐 Sessions expire after {}s", ttl.num_seconds());
        }
        None => tracing::info!("🔐 Sessions last until logout"),
    }

    let router = build_router(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Interviewer ready");

    Ok(router.into())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, Response};

    pub fn state_with(provider: Arc<dyn LlmProvider>) -> AppState {
        AppState::new(&AppConfig::default(), provider)
    }

    pub async fn body_string(response: Response<Body>) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    pub fn json_post(path: &str, body: serde_json::Value) -> Request<Body> {
        Request::post(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub fn form_post(path: &str, body: &str) -> Request<Body> {
        Request::post(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    /// `name=value` pairs from every Set-Cookie header
    pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
        response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|v| v.split(';').next())
            .map(str::to_string)
            .collect()
    }
}
