use crate::{
    assemble::build_transcript,
    config::SummaryConfig,
    error::Result,
    normalize::normalize_captions,
    source::CaptionSource,
    types::TranscriptResult,
    video_id::extract_video_id,
};

/// Resolve a URL to its captions and build the transcript views.
///
/// Fails before summarizing if the URL, the captions or their records are unusable.
pub async fn fetch_transcript<S: CaptionSource>(
    source: &S,
    url: &str,
    languages: &[String],
    config: &SummaryConfig,
) -> Result<TranscriptResult> {
    let video_id = extract_video_id(url)?;
    log::info!("Fetching captions for {}", video_id);

    let raw = source.fetch(video_id, languages).await?;
    let segments = normalize_captions(raw)?;

    build_transcript(video_id, &segments, config)
}
