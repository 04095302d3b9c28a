use crate::interface_adapters::handlers::{grant_jwt, healthz, verify_jwt};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    http::{HeaderValue, header::CACHE_CONTROL},
    middleware,
    response::Response,
    routing::get,
};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/grant-jwt", get(grant_jwt))
        .route("/api/verify", get(verify_jwt))
        .layer(middleware::map_response(disable_caching))
        .route("/healthz", get(healthz))
        .with_state(state)
}

// Credentials and claims are per-request; no intermediary may keep them.
async fn disable_caching(mut response: Response) -> Response {
    response
        .headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static("no-store, max-age=0"));
    response
}
