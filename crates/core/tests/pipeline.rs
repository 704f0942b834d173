use std::path::Path;

use skimmer_core::{
    DirCaptionSource, SUMMARY_MARKER, SkimmerError, SummaryConfig, default_languages,
    fetch_transcript,
};

const URL: &str = "https://www.youtube.com/watch?v=abcdefghijk";

fn store_track(root: &Path, lang: &str, captions: &serde_json::Value) {
    let dir = root.join("abcdefghijk");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(format!("{lang}.json")), captions.to_string()).unwrap();
}

#[tokio::test]
async fn test_end_to_end_views() {
    let dir = tempfile::tempdir().unwrap();
    store_track(
        dir.path(),
        "en",
        &serde_json::json!([
            {"text": "the cat sat", "start": 0.0, "duration": 5.0},
            {"text": "the cat ran fast", "start": 5.0, "duration": 5.0},
            {"text": "a dog slept", "start": 10.0, "duration": 5.0},
        ]),
    );

    let source = DirCaptionSource::new(dir.path());
    let result = fetch_transcript(&source, URL, &default_languages(), &SummaryConfig::default())
        .await
        .unwrap();

    assert_eq!(result.video_id, "abcdefghijk");
    assert_eq!(
        result.timed_view,
        "[00:00] the cat sat\n[00:05] the cat ran fast\n[00:10] a dog slept"
    );
    assert_eq!(result.plain_view, "the cat sat the cat ran fast a dog slept");
    assert_eq!(result.summary, "the cat ran fast the cat sat a dog slept...");
}

#[tokio::test]
async fn test_long_transcript_keeps_fifteen_segments() {
    let dir = tempfile::tempdir().unwrap();
    let captions: Vec<serde_json::Value> = (0..101)
        .map(|i| serde_json::json!({"text": format!("topic{}", i % 7), "start": i as f64 * 2.0}))
        .collect();
    store_track(dir.path(), "hi", &serde_json::Value::Array(captions));

    let source = DirCaptionSource::new(dir.path());
    let first = fetch_transcript(&source, URL, &default_languages(), &SummaryConfig::default())
        .await
        .unwrap();
    let second = fetch_transcript(&source, URL, &default_languages(), &SummaryConfig::default())
        .await
        .unwrap();

    let body = first.summary.strip_suffix(SUMMARY_MARKER).unwrap();
    let kept: Vec<&str> = body.split(' ').collect();
    assert_eq!(kept.len(), 15);
    // topic0..topic2 occur 15 times, the rest 14
    assert!(kept.iter().all(|t| ["topic0", "topic1", "topic2"].contains(t)));
    assert_eq!(kept[0], "topic0");
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_empty_track_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    store_track(dir.path(), "en", &serde_json::json!([]));

    let source = DirCaptionSource::new(dir.path());
    let result = fetch_transcript(&source, URL, &default_languages(), &SummaryConfig::default())
        .await
        .unwrap();
    assert_eq!(result.summary, SUMMARY_MARKER);
    assert!(result.timed_view.is_empty());
}

#[tokio::test]
async fn test_negative_start_short_circuits() {
    let dir = tempfile::tempdir().unwrap();
    store_track(
        dir.path(),
        "en",
        &serde_json::json!([
            {"text": "fine", "start": 0.0},
            {"text": "broken", "start": -1.0},
        ]),
    );

    let source = DirCaptionSource::new(dir.path());
    let err = fetch_transcript(&source, URL, &default_languages(), &SummaryConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SkimmerError::PreconditionViolation { index: 1, .. }
    ));
}

#[tokio::test]
async fn test_invalid_url_never_touches_source() {
    let source = DirCaptionSource::new("/nonexistent/skimmer/captions");
    let err = fetch_transcript(
        &source,
        "not a video link",
        &default_languages(),
        &SummaryConfig::default(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, SkimmerError::InvalidUrl { .. }));
}
