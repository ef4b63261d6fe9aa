use serde::{Deserialize, Serialize};

use crate::ytdlp::RawVideoInfo;

// Download request body
#[derive(Deserialize)]
pub struct DownloadRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub quality: Option<String>,
}

// Info request body
#[derive(Deserialize)]
pub struct InfoRequest {
    #[serde(default)]
    pub url: String,
}

// Uniform download response - failures are encoded here, never as a non-200 status
#[derive(Serialize, Debug, PartialEq)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct InfoResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploader: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl InfoResponse {
    // Projects the raw metadata, filling display defaults for absent fields
    pub fn from_raw(raw: RawVideoInfo) -> Self {
        Self {
            success: true,
            title: Some(raw.title.unwrap_or_else(|| "Unknown Title".to_string())),
            duration: Some(raw.duration_string.unwrap_or_else(|| "Unknown".to_string())),
            thumbnail: Some(raw.thumbnail.unwrap_or_default()),
            uploader: Some(raw.uploader.unwrap_or_else(|| "Unknown".to_string())),
            message: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            title: None,
            duration: None,
            thumbnail: None,
            uploader: None,
            message: Some(message.into()),
        }
    }
}

// Static /status payload, built once at startup
#[derive(Serialize, Debug, Clone)]
pub struct StatusResponse {
    pub status: &'static str,
    pub platform: &'static str,
    pub max_file_size: &'static str,
    pub rate_limit: String,
    pub supported_sites: &'static str,
}
