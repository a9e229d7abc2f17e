use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::iter::FromIterator;
use std::path::{Path, PathBuf};

use log::warn;
#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};
use smartstring::alias::String as SmartString;
use thiserror::Error;

use crate::HashMap;

/// Words and their relative frequency
///
/// Scores are expected to lie in `[0, 1]`, with the most frequent word of the source corpus
/// scoring 1. Words that are missing or score 0 never take part in a segmentation.
#[cfg_attr(feature = "with-serde", derive(Deserialize, Serialize))]
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    words: HashMap<SmartString, f64>,
    max_len: usize,
}

impl Lexicon {
    /// Load a lexicon from CSV lines of the form `word,probability`
    ///
    /// Lines are lowercased; words shorter than [`MIN_LEX_LENGTH`] are skipped. A missing or
    /// unparsable probability is replaced by [`DEFAULT_PROBABILITY`]. Only I/O failures are
    /// reported as errors.
    pub fn load<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let mut lexicon = Self::default();
        for (i, ln) in reader.lines().enumerate() {
            let ln = ln.map_err(|source| LoadError::Read { line: i + 1, source })?;
            let ln = ln.to_lowercase();

            let mut fields = ln.split(',');
            let word = fields.next().unwrap_or_default();
            if word.chars().count() < MIN_LEX_LENGTH {
                continue;
            }

            let score = match fields.next().map(|p| p.trim().parse::<f64>()) {
                Some(Ok(p)) => {
                    if !(0.0..=1.0).contains(&p) {
                        warn!(
                            "probability {} for {:?} on line {} is outside [0, 1]",
                            p,
                            word,
                            i + 1
                        );
                    }
                    p
                }
                _ => {
                    warn!(
                        "no usable probability for {:?} on line {}, using {}",
                        word,
                        i + 1,
                        DEFAULT_PROBABILITY
                    );
                    DEFAULT_PROBABILITY
                }
            };

            lexicon.insert(word, score);
        }

        Ok(lexicon)
    }

    /// Load a lexicon from the CSV file at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_owned(),
            source,
        })?;

        Self::load(BufReader::new(file))
    }

    /// Set the score for `word`, replacing any previous score
    pub fn insert(&mut self, word: impl Into<SmartString>, score: f64) {
        let word = word.into();
        self.max_len = self.max_len.max(word.chars().count());
        self.words.insert(word, score);
    }

    /// Score for `word`, or 0 if the lexicon doesn't contain it
    pub fn score(&self, word: &str) -> f64 {
        self.words.get(word).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.score(word) > 0.0
    }

    /// Length in characters of the longest word
    pub fn max_word_len(&self) -> usize {
        self.max_len
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<W: Into<SmartString>> FromIterator<(W, f64)> for Lexicon {
    fn from_iter<I: IntoIterator<Item = (W, f64)>>(iter: I) -> Self {
        let mut lexicon = Self::default();
        for (word, score) in iter {
            lexicon.insert(word, score);
        }
        lexicon
    }
}

/// Lowercase a line of concatenated text, or `None` if it is too short to split
pub fn prepare_line(line: &str) -> Option<String> {
    match line.chars().count() >= MIN_LEX_LENGTH {
        true => Some(line.to_lowercase()),
        false => None,
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open lexicon {path:?}: {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error("failed to read lexicon line {line}: {source}")]
    Read { line: usize, source: io::Error },
}

/// Lexicon words and lines of text must be at least this many characters
pub const MIN_LEX_LENGTH: usize = 2;

/// Score given to lexicon words without a usable probability
pub const DEFAULT_PROBABILITY: f64 = 0.0;
