use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkimmerError {
    #[error("Invalid segment at index {index}: {reason}")]
    PreconditionViolation { index: usize, reason: String },

    #[error("Invalid URL: no video id found in {url}")]
    InvalidUrl { url: String },

    #[error("Captions are disabled for video {video_id}")]
    CaptionsDisabled { video_id: String },

    #[error("No captions found for video {video_id} (tried: {})", languages.join(", "))]
    NoCaptionsFound {
        video_id: String,
        languages: Vec<String>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SkimmerError>;
