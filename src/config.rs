use clap::Parser;
use std::path::PathBuf;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "ytdlp-gateway")]
#[command(about = "HTTP front-end for yt-dlp video downloads")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    // yt-dlp binary to invoke
    #[arg(long, default_value = "yt-dlp")]
    pub ytdlp_bin: PathBuf,

    // Scratch directory for downloaded files (cleaned up externally)
    #[arg(long, default_value = "/tmp")]
    pub scratch_dir: PathBuf,

    // Rate limit max downloads per window
    #[arg(long, default_value_t = 10)]
    pub rate_limit: usize,

    // Rate limit window in seconds
    #[arg(long, default_value_t = 3600)]
    pub rate_window: u64,
}
