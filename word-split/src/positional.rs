use std::ops::Range;

use crate::{normalize, HashMap, Segmenter};

/// Returns the best-scoring split of `line` into lexicon words and unknown chunks
pub(crate) fn segment(data: &Segmenter, line: &str) -> String {
    let mut state = PositionalState::new(data, line);
    state.search(0, 0);

    let mut result = String::with_capacity(line.len() * 2);
    let mut start = 0;
    for &split in &state.best[0] {
        result.push_str(state.chunk(start..split));
        result.push(' ');
        start = split;
    }

    normalize(&result)
}

struct PositionalState<'a> {
    data: &'a Segmenter,
    text: &'a str,
    /// Byte offset of every char boundary in `text`, including the end
    bounds: Vec<usize>,
    memo: HashMap<usize, (f64, Range<usize>)>,
    split_cache: Vec<usize>,
    best: Vec<Vec<usize>>,
}

impl<'a> PositionalState<'a> {
    fn new(data: &'a Segmenter, text: &'a str) -> Self {
        let bounds = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(Some(text.len()))
            .collect::<Vec<_>>();

        Self {
            data,
            text,
            best: vec![vec![]; bounds.len()],
            bounds,
            memo: HashMap::default(),
            split_cache: Vec::new(),
        }
    }

    /// Score the text from char position `start` to the end, storing its splits at `level`
    fn search(&mut self, level: usize, start: usize) -> f64 {
        let end = self.bounds.len() - 1;
        if start == end {
            self.best[level].clear();
            return 0.0;
        }

        let mut best = f64::MIN;
        for split in (start + 1)..=end.min(start + self.data.limit.max(1)) {
            let prefix_score = self.data.chunk_score(self.chunk(start..split)).log10();

            let suffix_splits = match self.memo.get(&split) {
                Some((score, splits)) => (*score, splits.clone()),
                None => {
                    let suffix_score = self.search(level + 1, split);

                    let start = self.split_cache.len();
                    self.split_cache.extend(&self.best[level + 1][..]);
                    let end = self.split_cache.len();
                    self.memo.insert(split, (suffix_score, start..end));

                    (suffix_score, start..end)
                }
            };

            let score = prefix_score + suffix_splits.0;
            if score > best {
                best = score;
                let splits = &mut self.best[level];
                splits.clear();
                splits.push(split);
                splits.extend(&self.split_cache[suffix_splits.1]);
            }
        }

        best
    }

    fn chunk(&self, range: Range<usize>) -> &'a str {
        let text = self.text;
        &text[self.bounds[range.start]..self.bounds[range.end]]
    }
}

#[cfg(test)]
mod tests {
    use crate::{Segmenter, Strategy};

    fn segmenter() -> Segmenter {
        let mut segmenter = Segmenter::from_iters(vec![
            ("a", 0.5),
            ("an", 0.6),
            ("art", 0.4),
            ("the", 0.9),
            ("cat", 0.8),
        ]);
        segmenter.set_strategy(Strategy::Positional);
        segmenter
    }

    #[test]
    fn known_words() {
        let segmenter = segmenter();
        assert_eq!(super::segment(&segmenter, "aart"), "a art");
        assert_eq!(super::segment(&segmenter, "thecat"), "the cat");
        assert_eq!(super::segment(&segmenter, "catthe"), "cat the");
    }

    #[test]
    fn unknown_text_stays_together() {
        let segmenter = segmenter();
        assert_eq!(super::segment(&segmenter, "xyz"), "xyz");
        assert_eq!(super::segment(&segmenter, "thexyz"), "the xyz");
        assert_eq!(super::segment(&segmenter, ""), "");
    }

    #[test]
    fn limit_bounds_chunks() {
        let mut segmenter = segmenter();
        segmenter.set_limit(2);
        assert_eq!(super::segment(&segmenter, "xyzw"), "xy zw");
    }
}
