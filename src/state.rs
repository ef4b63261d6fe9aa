use crate::models::StatusResponse;
use crate::rate_limit::RateLimiter;
use crate::ytdlp::YtDlp;

// App's shared state
pub struct AppState {
    pub limiter: RateLimiter,
    pub fetcher: YtDlp,
    pub status: StatusResponse,
    // Built once from config so it never disagrees with the actual limit
    pub rate_limit_message: String,
}
