use serde::Deserialize;
use std::path::PathBuf;
use std::process::Stdio;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tracing::{info, warn};

// Hard ceiling passed to yt-dlp; downloads above this abort inside the tool
pub const MAX_FILESIZE: &str = "100M";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("file exceeds the 100MB ceiling")]
    TooLarge,
    #[error("site not supported by yt-dlp")]
    UnsupportedSite,
    #[error("video unavailable")]
    VideoUnavailable,
    #[error("failed to launch yt-dlp: {0}")]
    Launch(std::io::Error),
    #[error("yt-dlp exited with an error")]
    Failed,
}

impl FetchError {
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::TooLarge => "❌ File too large (max 100MB)",
            FetchError::UnsupportedSite => "❌ Unsupported website",
            FetchError::VideoUnavailable => "❌ Video not available",
            FetchError::Launch(_) | FetchError::Failed => "❌ Download failed",
        }
    }
}

#[derive(Debug, Error)]
pub enum InfoError {
    #[error("failed to parse video info")]
    Parse,
    #[error("failed to get video info")]
    Fetch,
}

impl InfoError {
    pub fn user_message(&self) -> &'static str {
        match self {
            InfoError::Parse => "Failed to parse video info",
            InfoError::Fetch => "Failed to get video info",
        }
    }
}

// Subset of yt-dlp's --dump-json output we care about. Everything is optional;
// missing fields get display defaults at the response boundary.
#[derive(Debug, Deserialize)]
pub struct RawVideoInfo {
    pub title: Option<String>,
    pub duration_string: Option<String>,
    pub thumbnail: Option<String>,
    pub uploader: Option<String>,
}

// Maps yt-dlp stderr text to a failure reason. Matching is on fixed marker
// substrings from yt-dlp's messages; if the tool's wording drifts, this is the
// one place to fix.
fn classify_stderr(stderr: &str) -> FetchError {
    if stderr.contains("File is larger") {
        FetchError::TooLarge
    } else if stderr.contains("Unsupported URL") {
        FetchError::UnsupportedSite
    } else if stderr.contains("Video unavailable") {
        FetchError::VideoUnavailable
    } else {
        FetchError::Failed
    }
}

// Reads a pipe to completion line by line, accumulating the full text.
// Progress lines get logged as they arrive.
async fn drain_lines<R: AsyncRead + Unpin>(reader: Option<R>, log_progress: bool) -> String {
    let Some(reader) = reader else {
        return String::new();
    };

    let mut lines = BufReader::new(reader).lines();
    let mut text = String::new();
    while let Ok(Some(line)) = lines.next_line().await {
        if log_progress && (line.contains("[download]") || line.contains('%')) {
            info!("📊 {}", line.trim());
        }
        text.push_str(&line);
        text.push('\n');
    }
    text
}

// Wrapper around the yt-dlp binary. Owns nothing but the invocation config;
// downloaded files land in the scratch dir and are cleaned up externally.
pub struct YtDlp {
    binary: PathBuf,
    scratch_dir: PathBuf,
}

impl YtDlp {
    pub fn new(binary: PathBuf, scratch_dir: PathBuf) -> Self {
        Self { binary, scratch_dir }
    }

    // Title capped at 100 chars so long video names don't blow up the path
    fn output_template(&self) -> String {
        format!("{}/%(title).100s.%(ext)s", self.scratch_dir.display())
    }

    // Runs a download to completion. Both pipes are drained concurrently with
    // the child so yt-dlp can't block on a full pipe buffer. No timeout is
    // enforced beyond the tool's own --max-filesize abort.
    pub async fn download(&self, url: &str, format: &str) -> Result<(), FetchError> {
        let template = self.output_template();

        let mut child = Command::new(&self.binary)
            .arg("-f")
            .arg(format)
            .arg("--merge-output-format")
            .arg("mp4")
            .arg("-o")
            .arg(&template)
            .arg("--no-warnings")
            .arg("--max-filesize")
            .arg(MAX_FILESIZE)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                warn!("failed to spawn {}: {}", self.binary.display(), e);
                FetchError::Launch(e)
            })?;

        let stdout_pipe = child.stdout.take();
        let stderr_pipe = child.stderr.take();

        let (status, _stdout_text, stderr_text) = tokio::join!(
            child.wait(),
            drain_lines(stdout_pipe, true),
            drain_lines(stderr_pipe, false),
        );

        let status = status.map_err(FetchError::Launch)?;
        if status.success() {
            Ok(())
        } else {
            warn!("yt-dlp exited with {}: {}", status, stderr_text.trim());
            Err(classify_stderr(&stderr_text))
        }
    }

    // Metadata-only invocation; no file is written.
    pub async fn fetch_info(&self, url: &str) -> Result<RawVideoInfo, InfoError> {
        let output = Command::new(&self.binary)
            .arg("--dump-json")
            .arg("--no-warnings")
            .arg(url)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                warn!("failed to spawn {}: {}", self.binary.display(), e);
                InfoError::Fetch
            })?;

        if !output.status.success() || output.stdout.is_empty() {
            return Err(InfoError::Fetch);
        }

        serde_json::from_slice(&output.stdout).map_err(|e| {
            warn!("could not parse yt-dlp metadata: {}", e);
            InfoError::Parse
        })
    }
}
