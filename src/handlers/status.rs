use axum::{Json, extract::State};
use std::sync::Arc;

use crate::models::StatusResponse;
use crate::state::AppState;

// Static descriptive payload, independent of limiter and subprocess state
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(state.status.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate_limit::RateLimiter;
    use crate::ytdlp::YtDlp;
    use std::path::PathBuf;
    use std::time::Duration;

    #[tokio::test]
    async fn test_status_payload_is_stable() {
        let state = Arc::new(AppState {
            limiter: RateLimiter::new(10, Duration::from_secs(3600)),
            fetcher: YtDlp::new(PathBuf::from("yt-dlp"), PathBuf::from("/tmp")),
            status: StatusResponse {
                status: "online",
                platform: "Render.com",
                max_file_size: "100MB",
                rate_limit: "10 downloads/hour".to_string(),
                supported_sites: "YouTube, Facebook, Instagram, TikTok, Vimeo, Dailymotion",
            },
            rate_limit_message: "⏳ Rate limit: Max 10 downloads per hour. Please wait."
                .to_string(),
        });

        // burn through the limiter; status must not care
        for _ in 0..20 {
            state.limiter.allow("1.2.3.4");
        }

        let Json(first) = status_handler(State(state.clone())).await;
        let Json(second) = status_handler(State(state)).await;
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
        assert_eq!(first.status, "online");
        assert_eq!(first.max_file_size, "100MB");
        assert_eq!(first.rate_limit, "10 downloads/hour");
    }
}
