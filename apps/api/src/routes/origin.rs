//! Cross-origin policy: an allow-list guard in front of the handlers plus the
//! `tower-http` CORS layer that answers preflights and sets response headers.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use crate::config::Config;
use crate::errors::AppError;

/// Rejects requests whose `Origin` is not in the allow-list. Requests without
/// an `Origin` header (curl, server-to-server) pass through.
pub async fn require_allowed_origin(
    State(config): State<Arc<Config>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let rejected = request
        .headers()
        .get(header::ORIGIN)
        .map(|origin| String::from_utf8_lossy(origin.as_bytes()).into_owned())
        .filter(|origin| !config.is_origin_allowed(origin));

    if let Some(origin) = rejected {
        warn!("Rejected request from disallowed origin '{origin}'");
        return Err(AppError::OriginNotAllowed(origin));
    }

    Ok(next.run(request).await)
}

pub fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid origin in ALLOWED_ORIGINS: '{origin}'");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
