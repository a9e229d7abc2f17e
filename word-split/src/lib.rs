//! Split concatenated text into the most probable sequence of lexicon words
//!
//! A [`Segmenter`] owns a [`Lexicon`] of words and their relative frequencies. For every line
//! it collects the lexicon words occurring in it, tries a single greedy left-to-right pass and,
//! when that pass can't account for every word, searches the combinations of those words for
//! the one that best explains the line.

use log::{debug, trace, warn};
#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};
use smartstring::alias::String as SmartString;

mod analysis;
mod lexicon;
mod positional;
mod search;
#[cfg(feature = "test-cases")]
pub mod test_cases;
#[cfg(feature = "__test_data")]
pub mod test_data;

pub use analysis::SegmentAnalysis;
pub use lexicon::{prepare_line, Lexicon, LoadError, DEFAULT_PROBABILITY, MIN_LEX_LENGTH};
pub use search::{combinations, search, select, Outcome};

/// Central data structure used to split concatenated text
#[cfg_attr(feature = "with-serde", derive(Deserialize, Serialize))]
pub struct Segmenter {
    lexicon: Lexicon,
    strategy: Strategy,
    max_depth: usize,
    limit: usize,
}

impl Segmenter {
    /// Create a `Segmenter` that reads word scores from `lexicon`
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            strategy: Strategy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Create a `Segmenter` from the given `(word, score)` iterator
    ///
    /// Note: the `String` type stored in the lexicon is defined in the `smartstring` crate.
    /// Any `&str` or `String` can be passed here, since both convert into it.
    pub fn from_iters<W, I>(words: I) -> Self
    where
        W: Into<SmartString>,
        I: IntoIterator<Item = (W, f64)>,
    {
        Self::new(words.into_iter().collect())
    }

    /// Split `line` into words, separated by single spaces
    pub fn segment(&self, line: &str) -> String {
        self.segment_detailed(line).text
    }

    /// Split `line` into words and report which method produced the result
    pub fn segment_detailed(&self, line: &str) -> Segmentation {
        let candidates = self.candidates(line);
        trace!(
            "candidates for {:?}: {:?}",
            line,
            candidates.iter().map(|c| c.word()).collect::<Vec<_>>()
        );

        if let Some(text) = greedy(line, &candidates) {
            debug!("greedy pass accounted for all words in {:?}", line);
            return Segmentation {
                text,
                method: Method::Greedy,
            };
        }

        match self.strategy {
            Strategy::Exhaustive => self.exhaustive(line, &candidates),
            Strategy::Positional => Segmentation {
                text: positional::segment(self, line),
                method: Method::Positional,
            },
        }
    }

    /// Returns every substring of `line` that has a positive score in the lexicon
    ///
    /// Candidates are ordered by the position where they end; candidates ending at the same
    /// position are ordered shortest first. A word occurring more than once in `line` yields
    /// one candidate per occurrence.
    pub fn candidates(&self, line: &str) -> Vec<WordEntry> {
        let bounds = line
            .char_indices()
            .map(|(i, _)| i)
            .chain(Some(line.len()))
            .collect::<Vec<_>>();

        let max_len = self.lexicon.max_word_len();
        let mut words = Vec::new();
        for end in 1..bounds.len() {
            for start in (end.saturating_sub(max_len)..end).rev() {
                let word = &line[bounds[start]..bounds[end]];
                let score = self.lexicon.score(word);
                if score > 0.0 {
                    words.push(WordEntry::new(word, score));
                }
            }
        }

        words
    }

    fn exhaustive(&self, line: &str, candidates: &[WordEntry]) -> Segmentation {
        let outcome = search(line, candidates, self.max_depth);
        debug!(
            "evaluated {} combinations of {} candidates for {:?}",
            outcome.visited,
            candidates.len(),
            line
        );

        match outcome.best {
            Some(best) => Segmentation {
                text: best.apply(line),
                method: Method::Exhaustive,
            },
            None => {
                warn!("no combination matched all of its words in {:?}, leaving it unsplit", line);
                Segmentation {
                    text: normalize(line),
                    method: Method::Fallback,
                }
            }
        }
    }

    /// Word scores used by this segmenter
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Choose the search used when the greedy pass fails
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    /// Customize how deep the combination search recurses
    ///
    /// Lines with more candidates than `max_depth` only have part of their combinations
    /// explored.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
    }

    /// Customize the longest chunk (in characters) considered by [`Strategy::Positional`]
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
    }

    fn chunk_score(&self, chunk: &str) -> f64 {
        match self.lexicon.score(chunk) {
            p if p > 0.0 => p,
            // Penalize chunks not found in the lexicon according
            // to their length, a crucial heuristic.
            _ => 10.0 / (UNKNOWN_TOTAL * 10.0f64.powi(chunk.chars().count() as i32)),
        }
    }
}

/// A lexicon word found in a line, paired with its score
#[derive(Clone, Debug, PartialEq)]
pub struct WordEntry {
    word: SmartString,
    score: f64,
}

impl WordEntry {
    pub fn new(word: impl Into<SmartString>, score: f64) -> Self {
        Self {
            word: word.into(),
            score,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

/// Result of [`Segmenter::segment_detailed()`]
#[derive(Clone, Debug, PartialEq)]
pub struct Segmentation {
    pub text: String,
    pub method: Method,
}

/// How a [`Segmentation`] was found
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// The greedy pass consumed every candidate
    Greedy,
    /// Picked from the combinations of candidates
    Exhaustive,
    /// Best split sequence over text positions
    Positional,
    /// No combination qualified; the line is returned unsplit
    Fallback,
}

/// Search used when the greedy pass can't account for every candidate
#[cfg_attr(feature = "with-serde", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Evaluate every combination of candidates (up to the depth limit)
    Exhaustive,
    /// Memoized search for the best split at each text position
    Positional,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Exhaustive
    }
}

/// Single left-to-right pass consuming `candidates` from the front of `line`
///
/// Text skipped over to reach a candidate is kept as a word of its own. Returns `None` unless
/// every candidate was found.
fn greedy(line: &str, candidates: &[WordEntry]) -> Option<String> {
    let mut joined = line;
    let mut result = String::with_capacity(line.len() * 2);
    let mut used = 0;

    for entry in candidates {
        let word = entry.word();
        match joined.find(word) {
            Some(0) => {
                result.push_str(word);
                result.push(' ');
                joined = &joined[word.len()..];
            }
            Some(pos) => {
                // The word itself stays at the front of `joined`
                result.push_str(&joined[..pos]);
                result.push(' ');
                joined = &joined[pos..];
            }
            None => continue,
        }
        used += 1;
    }

    result.push_str(joined);
    match used == candidates.len() {
        true => Some(normalize(&result)),
        false => None,
    }
}

/// Trim `text` and collapse every inner run of two or more whitespace characters to one space
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.trim().chars().peekable();
    while let Some(c) = chars.next() {
        if !c.is_whitespace() || !chars.peek().map_or(false, |n| n.is_whitespace()) {
            out.push(c);
            continue;
        }

        while chars.peek().map_or(false, |n| n.is_whitespace()) {
            chars.next();
        }
        out.push(' ');
    }

    out
}

type HashMap<K, V> = std::collections::HashMap<K, V, ahash::RandomState>;

const DEFAULT_MAX_DEPTH: usize = 22;
const DEFAULT_LIMIT: usize = 24;
const UNKNOWN_TOTAL: f64 = 1_000_000.0;
