use serde::{Deserialize, Serialize};

/// One timestamped line of transcript text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: f64,
    pub text: String,
}

impl Segment {
    pub fn new(start: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            text: text.into(),
        }
    }
}

/// Caption record as handed over by a caption source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCaption {
    pub text: String,
    pub start: f64,
    #[serde(default)]
    pub duration: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptResult {
    pub video_id: String,
    pub timed_view: String,
    pub plain_view: String,
    pub summary: String,
}
