mod download;
mod index;
mod info;
mod metrics;
mod status;

pub use download::download_handler;
pub use index::index_handler;
pub use info::info_handler;
pub use metrics::metrics_handler;
pub use status::status_handler;

use axum::http::HeaderMap;
use std::net::SocketAddr;

// Client identity for rate limiting: first X-Forwarded-For hop if present,
// otherwise the peer address. Unauthenticated and spoofable, same as the
// limiter it feeds.
pub(crate) fn client_ip(headers: &HeaderMap, peer: SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| peer.ip().to_string())
}
