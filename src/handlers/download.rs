use axum::{
    Json,
    extract::{ConnectInfo, State},
    http::HeaderMap,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::metrics::{DOWNLOAD_FAILURES, DOWNLOAD_LATENCY, DOWNLOAD_REQUESTS, RATE_LIMITED};
use crate::models::{ApiResponse, DownloadRequest};
use crate::quality;
use crate::state::AppState;

// The rate-limit gate runs before URL validation, so a malformed request
// still consumes quota. Always responds 200; failure lives in the payload.
pub async fn download_handler(
    State(state): State<Arc<AppState>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(req): Json<DownloadRequest>,
) -> Json<ApiResponse> {
    DOWNLOAD_REQUESTS.inc();

    let client = super::client_ip(&headers, peer);
    if !state.limiter.allow(&client) {
        RATE_LIMITED.inc();
        return Json(ApiResponse::fail(state.rate_limit_message.clone()));
    }

    if req.url.is_empty() {
        return Json(ApiResponse::fail("❌ URL is required"));
    }

    info!("📥 Download request: {}", req.url);

    let format = quality::resolve(req.quality.as_deref());
    let start = Instant::now();

    let response = match state.fetcher.download(&req.url, format).await {
        Ok(()) => {
            ApiResponse::ok("✅ Download completed! File will auto-delete after some time.")
        }
        Err(e) => {
            DOWNLOAD_FAILURES.inc();
            ApiResponse::fail(e.user_message())
        }
    };
    DOWNLOAD_LATENCY.observe(start.elapsed().as_secs_f64());

    Json(response)
}
