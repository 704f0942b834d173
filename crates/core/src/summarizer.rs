//! Keyword-frequency extractive summarizer
//!
//! Every transcript segment is treated as one sentence. A segment's score is
//! the sum of the transcript-wide frequencies of its non-stopword tokens,
//! divided by the highest single-token frequency. Scores are not clipped, so
//! long segments that repeat frequent words can score above 1.

use std::{cmp::Ordering, collections::HashMap};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    config::{StopwordSet, SummaryConfig},
    types::Segment,
};

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}\p{N}_]+").unwrap());

/// Split text into lowercase runs of letters, digits and underscores.
///
/// Punctuation and combining marks (such as Devanagari vowel signs) separate tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Stopword-filtered token counts over a whole transcript.
///
/// Built per summarization call and dropped with it.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn build(segments: &[Segment], stopwords: &StopwordSet) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for segment in segments {
            for token in tokenize(&segment.text) {
                if !stopwords.contains(&token) {
                    *counts.entry(token).or_insert(0) += 1;
                }
            }
        }
        Self { counts }
    }

    pub fn get(&self, token: &str) -> Option<usize> {
        self.counts.get(token).copied()
    }

    /// Highest count in the table, never below 1
    pub fn max_frequency(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(1).max(1)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScoredSegment<'a> {
    /// Position in the source transcript
    pub index: usize,
    pub segment: &'a Segment,
    pub score: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: SummaryConfig,
}

impl Summarizer {
    pub fn new(config: SummaryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    pub fn target_count(&self, segment_count: usize) -> usize {
        self.config.target_count(segment_count)
    }

    /// Score every segment and order them by descending score.
    ///
    /// Equal scores keep their transcript order.
    pub fn rank<'a>(&self, segments: &'a [Segment]) -> Vec<ScoredSegment<'a>> {
        let table = FrequencyTable::build(segments, &self.config.stopwords);
        let max_frequency = table.max_frequency() as f64;
        log::debug!(
            "frequency table: {} distinct tokens, max frequency {}",
            table.len(),
            max_frequency
        );

        let mut scored: Vec<ScoredSegment<'a>> = segments
            .iter()
            .enumerate()
            .map(|(index, segment)| {
                let total: usize = tokenize(&segment.text)
                    .iter()
                    .filter_map(|token| table.get(token))
                    .sum();
                ScoredSegment {
                    index,
                    segment,
                    score: total as f64 / max_frequency,
                }
            })
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored
    }

    /// Join the text of the `k` best segments, best first
    pub fn summarize(&self, segments: &[Segment], k: usize) -> String {
        self.rank(segments)
            .into_iter()
            .take(k)
            .map(|scored| scored.segment.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
