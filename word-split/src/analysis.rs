use crate::{normalize, WordEntry};

/// How well one combination of candidate words explains a line
///
/// Words are removed from a copy of the line in combination order, one occurrence each.
/// Words that can no longer be found are not counted as used.
#[derive(Clone, Debug)]
pub struct SegmentAnalysis<'a> {
    words: Vec<&'a WordEntry>,
    words_used: usize,
    remaining_len: usize,
}

impl<'a> SegmentAnalysis<'a> {
    /// Evaluate the combination `words` against `line`
    pub fn evaluate(line: &str, words: Vec<&'a WordEntry>) -> Self {
        let mut working = line.to_owned();
        let mut words_used = 0;
        for entry in words.iter() {
            let word = entry.word();
            if let Some(pos) = working.find(word) {
                // A space keeps later words from matching across the gap
                working.replace_range(pos..pos + word.len(), " ");
                words_used += 1;
            }
        }

        Self {
            remaining_len: normalize(&working).chars().count(),
            words_used,
            words,
        }
    }

    /// An analysis in which every one of `words` was found
    pub(crate) fn complete(words: Vec<&'a WordEntry>, remaining_len: usize) -> Self {
        Self {
            words_used: words.len(),
            remaining_len,
            words,
        }
    }

    /// Re-derive `line` with a space on either side of each word's first occurrence
    pub fn apply(&self, line: &str) -> String {
        let mut text = line.to_owned();
        for entry in self.words.iter() {
            let word = entry.word();
            if let Some(pos) = text.find(word) {
                text.replace_range(pos..pos + word.len(), &format!(" {} ", word));
            }
        }

        normalize(&text)
    }

    /// Whether every word in the combination was found
    pub fn matched_all_words(&self) -> bool {
        self.words_used == self.words.len()
    }

    /// Product of all word scores, scaled by the fraction of words used
    pub fn probability(&self) -> f64 {
        if self.words.is_empty() {
            return 0.0;
        }

        let product = self.words.iter().map(|w| w.score()).product::<f64>();
        product * (self.words_used as f64 / self.words.len() as f64)
    }

    /// Number of characters left over after removing the matched words
    pub fn remaining_len(&self) -> usize {
        self.remaining_len
    }

    pub fn words_used(&self) -> usize {
        self.words_used
    }

    pub fn words(&self) -> &[&'a WordEntry] {
        &self.words
    }
}
