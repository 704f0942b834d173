use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{
    cache::{get_caption_track_path, get_video_captions_dir},
    error::{Result, SkimmerError},
    types::RawCaption,
};

/// Caption languages tried in order when the caller does not pick any
pub const DEFAULT_LANGUAGES: &[&str] = &["hi", "en", "en-IN"];

/// Marker file placed next to a video's tracks when its captions are disabled
pub const DISABLED_MARKER: &str = "disabled";

pub fn default_languages() -> Vec<String> {
    DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect()
}

/// Supplies caption records for a video.
///
/// `languages` is a preference order: the first language with a track wins.
pub trait CaptionSource {
    async fn fetch(&self, video_id: &str, languages: &[String]) -> Result<Vec<RawCaption>>;
}

/// Reads caption tracks an external fetcher stored as
/// `<root>/<video_id>/<lang>.json`.
#[derive(Debug, Clone)]
pub struct DirCaptionSource {
    root: PathBuf,
}

impl DirCaptionSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl CaptionSource for DirCaptionSource {
    async fn fetch(&self, video_id: &str, languages: &[String]) -> Result<Vec<RawCaption>> {
        let not_found = || SkimmerError::NoCaptionsFound {
            video_id: video_id.to_string(),
            languages: languages.to_vec(),
        };

        let video_dir = get_video_captions_dir(&self.root, video_id);
        if !fs::try_exists(&video_dir).await? {
            return Err(not_found());
        }
        if fs::try_exists(video_dir.join(DISABLED_MARKER)).await? {
            return Err(SkimmerError::CaptionsDisabled {
                video_id: video_id.to_string(),
            });
        }

        for lang in languages {
            let track_path = get_caption_track_path(&video_dir, lang);
            if !fs::try_exists(&track_path).await? {
                log::debug!("no {} track for {}", lang, video_id);
                continue;
            }
            let json_content = fs::read_to_string(&track_path).await?;
            let captions: Vec<RawCaption> = serde_json::from_str(&json_content)?;
            log::info!(
                "Loaded {} captions for {} ({})",
                captions.len(),
                video_id,
                lang
            );
            return Ok(captions);
        }

        Err(not_found())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_track(root: &Path, video_id: &str, lang: &str, body: &str) {
        let dir = root.join(video_id);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(format!("{lang}.json")), body).unwrap();
    }

    #[tokio::test]
    async fn test_first_available_language_wins() {
        let dir = tempfile::tempdir().unwrap();
        write_track(dir.path(), "abcdefghijk", "en", r#"[{"text":"english","start":0.0}]"#);
        write_track(
            dir.path(),
            "abcdefghijk",
            "en-IN",
            r#"[{"text":"indian english","start":0.0,"duration":1.5}]"#,
        );

        let source = DirCaptionSource::new(dir.path());
        let captions = source
            .fetch("abcdefghijk", &default_languages())
            .await
            .unwrap();
        assert_eq!(captions.len(), 1);
        assert_eq!(captions[0].text, "english");

        let langs = vec!["en-IN".to_string(), "en".to_string()];
        let captions = source.fetch("abcdefghijk", &langs).await.unwrap();
        assert_eq!(captions[0].text, "indian english");
        assert_eq!(captions[0].duration, Some(1.5));
    }

    #[tokio::test]
    async fn test_unknown_video_has_no_captions() {
        let dir = tempfile::tempdir().unwrap();
        let err = DirCaptionSource::new(dir.path())
            .fetch("abcdefghijk", &default_languages())
            .await
            .unwrap_err();
        assert!(matches!(err, SkimmerError::NoCaptionsFound { .. }));
    }

    #[tokio::test]
    async fn test_missing_language_has_no_captions() {
        let dir = tempfile::tempdir().unwrap();
        write_track(dir.path(), "abcdefghijk", "de", "[]");
        let err = DirCaptionSource::new(dir.path())
            .fetch("abcdefghijk", &default_languages())
            .await
            .unwrap_err();
        match err {
            SkimmerError::NoCaptionsFound { languages, .. } => {
                assert_eq!(languages, default_languages())
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_disabled_marker() {
        let dir = tempfile::tempdir().unwrap();
        write_track(dir.path(), "abcdefghijk", "en", "[]");
        std::fs::write(dir.path().join("abcdefghijk").join(DISABLED_MARKER), "").unwrap();

        let err = DirCaptionSource::new(dir.path())
            .fetch("abcdefghijk", &default_languages())
            .await
            .unwrap_err();
        assert!(matches!(err, SkimmerError::CaptionsDisabled { .. }));
    }

    #[tokio::test]
    async fn test_malformed_track_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        write_track(dir.path(), "abcdefghijk", "hi", r#"[{"text": 12}]"#);
        let err = DirCaptionSource::new(dir.path())
            .fetch("abcdefghijk", &default_languages())
            .await
            .unwrap_err();
        assert!(matches!(err, SkimmerError::JsonError(_)));
    }
}
