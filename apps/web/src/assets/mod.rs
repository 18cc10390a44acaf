//! Static browser assets, embedded at compile time.

use axum::http::header;
use axum::response::IntoResponse;

/// Role stream subscriber, toast auto-dismiss and submit guard.
pub const SITE_JS: &str = include_str!("site.js");

/// GET /assets/site.js
pub async fn handle_site_js() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        SITE_JS,
    )
}
