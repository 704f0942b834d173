use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, SkimmerError};

static VIDEO_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").unwrap());

/// Extract the 11-character video id from a watch, short or embed URL.
pub fn extract_video_id(url: &str) -> Result<&str> {
    VIDEO_ID_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| SkimmerError::InvalidUrl {
            url: url.to_string(),
        })
}
