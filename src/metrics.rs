use lazy_static::lazy_static;
use prometheus::{Counter, Histogram, register_counter, register_histogram};

lazy_static! {
    pub static ref DOWNLOAD_REQUESTS: Counter = register_counter!(
        "ytdlp_download_requests_total",
        "Total number of download requests"
    )
    .unwrap();
    pub static ref DOWNLOAD_FAILURES: Counter = register_counter!(
        "ytdlp_download_failures_total",
        "Download requests that ended in a failure outcome"
    )
    .unwrap();
    pub static ref RATE_LIMITED: Counter = register_counter!(
        "ytdlp_rate_limited_total",
        "Requests rejected by the rate limiter"
    )
    .unwrap();
    pub static ref INFO_REQUESTS: Counter = register_counter!(
        "ytdlp_info_requests_total",
        "Total number of info requests"
    )
    .unwrap();
    pub static ref DOWNLOAD_LATENCY: Histogram = register_histogram!(
        "ytdlp_download_latency_seconds",
        "Wall time of yt-dlp download invocations"
    )
    .unwrap();
}
