mod config;
mod handlers;
mod metrics;
mod models;
mod quality;
mod rate_limit;
mod state;
mod ytdlp;

use axum::{
    Router,
    routing::{get, post},
};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::config::Args;
use crate::models::StatusResponse;
use crate::rate_limit::RateLimiter;
use crate::state::AppState;
use crate::ytdlp::YtDlp;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Creating shared state
    let state = Arc::new(AppState {
        limiter: RateLimiter::new(args.rate_limit, Duration::from_secs(args.rate_window)),
        fetcher: YtDlp::new(args.ytdlp_bin.clone(), args.scratch_dir.clone()),
        status: StatusResponse {
            status: "online",
            platform: "Render.com",
            max_file_size: "100MB",
            rate_limit: format!("{} downloads/hour", args.rate_limit),
            supported_sites: "YouTube, Facebook, Instagram, TikTok, Vimeo, Dailymotion",
        },
        rate_limit_message: format!(
            "⏳ Rate limit: Max {} downloads per hour. Please wait.",
            args.rate_limit
        ),
    });

    let app = Router::new()
        .route("/", get(handlers::index_handler))
        .route("/download", post(handlers::download_handler))
        .route("/info", post(handlers::info_handler))
        .route("/status", get(handlers::status_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    info!("🎥 Video downloader running on port {}", args.port);
    info!("Using {} with scratch dir {}", args.ytdlp_bin.display(), args.scratch_dir.display());
    info!(
        "Rate limit: {} downloads per {} seconds, max file size 100MB",
        args.rate_limit, args.rate_window
    );

    // ConnectInfo gives handlers the peer address for rate limiting
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
