//! Skimmer Core Library
//!
//! Turns stored video captions into a timestamped view, a plain reading view
//! and a keyword-frequency extractive summary.

pub mod assemble;
pub mod cache;
pub mod config;
pub mod error;
pub mod format;
pub mod normalize;
pub mod pipeline;
pub mod source;
pub mod summarizer;
pub mod types;
pub mod video_id;

// Re-export commonly used items at crate root
pub use assemble::{SUMMARY_MARKER, assemble, build_transcript};
pub use cache::{get_captions_dir, get_config_path, get_root_cache_dir};
pub use config::{StopwordSet, SummaryConfig};
pub use error::{Result, SkimmerError};
pub use format::{format_report_readable, format_timed_view, format_timestamp};
pub use normalize::normalize_captions;
pub use pipeline::fetch_transcript;
pub use source::{CaptionSource, DirCaptionSource, default_languages};
pub use summarizer::{FrequencyTable, ScoredSegment, Summarizer, tokenize};
pub use types::{RawCaption, Segment, TranscriptResult};
pub use video_id::extract_video_id;
