use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::{cache::get_config_path, error::Result};

/// Common English function words excluded from frequency counting.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "is", "in", "at", "of", "on", "and", "a", "to", "it", "that", "this", "for", "with",
    "you", "are", "i", "am",
];

pub const DEFAULT_SHORT_THRESHOLD: usize = 100;
pub const DEFAULT_SHORT_K: usize = 5;
pub const DEFAULT_LONG_K: usize = 15;

/// Closed set of lowercase stopwords
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn from_list(words: &[&str]) -> Self {
        words.iter().map(|w| w.to_string()).collect::<Vec<_>>().into()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::from_list(DEFAULT_STOPWORDS)
    }
}

impl From<Vec<String>> for StopwordSet {
    fn from(words: Vec<String>) -> Self {
        Self {
            words: words.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }
}

impl From<StopwordSet> for Vec<String> {
    fn from(set: StopwordSet) -> Self {
        let mut words: Vec<String> = set.words.into_iter().collect();
        words.sort();
        words
    }
}

/// Summary policy: which words are ignored and how many segments are kept.
///
/// Transcripts with more than `short_threshold` segments get `long_k`
/// summary segments, everything else gets `short_k`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub stopwords: StopwordSet,
    pub short_threshold: usize,
    pub short_k: usize,
    pub long_k: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            stopwords: StopwordSet::default(),
            short_threshold: DEFAULT_SHORT_THRESHOLD,
            short_k: DEFAULT_SHORT_K,
            long_k: DEFAULT_LONG_K,
        }
    }
}

impl SummaryConfig {
    /// Number of segments to keep for a transcript of `segment_count` segments
    pub fn target_count(&self, segment_count: usize) -> usize {
        if segment_count > self.short_threshold {
            self.long_k
        } else {
            self.short_k
        }
    }

    /// Load a config from a JSON file. Missing fields keep their defaults.
    pub async fn load(path: &Path) -> Result<Self> {
        let json_content = fs::read_to_string(path).await?;
        let config: SummaryConfig = serde_json::from_str(&json_content)?;
        Ok(config)
    }

    /// Load `path` if given, otherwise the user config file when present.
    ///
    /// An explicit path must load; a broken user config file only warns.
    pub async fn resolve(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path).await;
        }

        let Some(default_path) = get_config_path() else {
            return Ok(Self::default());
        };
        if !fs::try_exists(&default_path).await.unwrap_or(false) {
            return Ok(Self::default());
        }

        match Self::load(&default_path).await {
            Ok(config) => {
                log::info!("Loaded config from {}", default_path.display());
                Ok(config)
            }
            Err(e) => {
                log::warn!(
                    "Ignoring config at {}: {}; using defaults",
                    default_path.display(),
                    e
                );
                Ok(Self::default())
            }
        }
    }
}
