use crate::{
    config::SummaryConfig,
    error::Result,
    format::format_timed_view,
    normalize::check_start,
    summarizer::Summarizer,
    types::{Segment, TranscriptResult},
};

/// Appended to every summary to mark it as an abridgement
pub const SUMMARY_MARKER: &str = "...";

/// Combine the timed, plain and summary views of a transcript
pub fn assemble(video_id: &str, segments: &[Segment], summary: &str) -> TranscriptResult {
    let plain_view = segments
        .iter()
        .map(|seg| seg.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    TranscriptResult {
        video_id: video_id.to_string(),
        timed_view: format_timed_view(segments),
        plain_view,
        summary: format!("{}{}", summary, SUMMARY_MARKER),
    }
}

/// Summarize normalized segments and assemble the full result.
///
/// An empty transcript produces empty views, not an error.
pub fn build_transcript(
    video_id: &str,
    segments: &[Segment],
    config: &SummaryConfig,
) -> Result<TranscriptResult> {
    for (index, segment) in segments.iter().enumerate() {
        check_start(index, segment.start)?;
    }

    let summarizer = Summarizer::new(config.clone());
    let k = summarizer.target_count(segments.len());
    log::debug!("summarizing {} segments down to {}", segments.len(), k);

    let summary = summarizer.summarize(segments, k);
    Ok(assemble(video_id, segments, &summary))
}
