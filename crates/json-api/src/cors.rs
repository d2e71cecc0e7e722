//! Cross-origin policy.

use salvo::{
    Handler,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Cors},
    http::header::HeaderValue,
};
use tracing::warn;

use crate::config::cors::CorsConfig;

/// Any method and header; any origin unless a list is configured.
pub(crate) fn handler(config: &CorsConfig) -> impl Handler {
    Cors::new()
        .allow_origin(allow_origin(&config.cors_allowed_origins))
        .allow_methods(AllowMethods::any())
        .allow_headers(AllowHeaders::any())
        .into_handler()
}

fn allow_origin(configured: &[String]) -> AllowOrigin {
    let origins: Vec<&str> = configured
        .iter()
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .collect();

    if origins.is_empty() || origins.contains(&"*") {
        return AllowOrigin::any();
    }

    AllowOrigin::list(origins.into_iter().filter_map(|origin| {
        HeaderValue::from_str(origin)
            .inspect_err(|source| warn!(origin, "ignoring invalid CORS origin: {source}"))
            .ok()
    }))
}
