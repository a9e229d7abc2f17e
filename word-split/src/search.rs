use crate::{normalize, SegmentAnalysis, WordEntry};

/// Visit every non-empty combination of `items`, in prefix-extension order
///
/// Each combination keeps the relative order of `items`. A branch either extends the current
/// prefix with the next item or skips it; `visit` is called once for every extension and the
/// results are returned in visiting order. Branches stop after `max_depth` levels, so only
/// part of the combinations are visited when `items` is longer than `max_depth`.
pub fn combinations<'a, T, V, F>(items: &'a [T], max_depth: usize, visit: &F) -> Vec<V>
where
    F: Fn(Vec<&'a T>) -> V,
{
    expand(&[], items, 0, max_depth, visit)
}

fn expand<'a, T, V, F>(
    prefix: &[&'a T],
    remain: &'a [T],
    depth: usize,
    max_depth: usize,
    visit: &F,
) -> Vec<V>
where
    F: Fn(Vec<&'a T>) -> V,
{
    let (first, rest) = match remain.split_first() {
        Some(split) if depth < max_depth => split,
        _ => return Vec::new(),
    };

    let mut combination = Vec::with_capacity(prefix.len() + 1);
    combination.extend_from_slice(prefix);
    combination.push(first);

    let mut visited = vec![visit(combination.clone())];
    visited.extend(expand(&combination, rest, depth + 1, max_depth, visit));
    visited.extend(expand(prefix, rest, depth + 1, max_depth, visit));
    visited
}

/// Find the combination of `candidates` that best explains `line`
///
/// Visits combinations in the same order as [`combinations()`] and picks the same winner as
/// [`select()`] would from all of them, but only keeps the best analysis of each subtree.
/// A combination containing a word that can't be found is not extended, since every extension
/// would miss the same word.
pub fn search<'a>(line: &str, candidates: &'a [WordEntry], max_depth: usize) -> Outcome<'a> {
    search_from(&[], line, candidates, 0, max_depth)
}

fn search_from<'a>(
    prefix: &[&'a WordEntry],
    working: &str,
    remain: &'a [WordEntry],
    depth: usize,
    max_depth: usize,
) -> Outcome<'a> {
    let (first, rest) = match remain.split_first() {
        Some(split) if depth < max_depth => split,
        _ => return Outcome::default(),
    };

    let mut outcome = Outcome {
        best: None,
        visited: 1,
    };

    let word = first.word();
    if let Some(pos) = working.find(word) {
        let mut extended = working.to_owned();
        extended.replace_range(pos..pos + word.len(), " ");

        let mut combination = Vec::with_capacity(prefix.len() + 1);
        combination.extend_from_slice(prefix);
        combination.push(first);

        let subtree = search_from(&combination, &extended, rest, depth + 1, max_depth);
        let remaining_len = normalize(&extended).chars().count();
        outcome.best = Some(SegmentAnalysis::complete(combination, remaining_len));
        outcome.merge(subtree);
    }

    outcome.merge(search_from(prefix, working, rest, depth + 1, max_depth));
    outcome
}

/// Result of [`search()`]
#[derive(Debug, Default)]
pub struct Outcome<'a> {
    /// Winning analysis, if any combination matched all of its words
    pub best: Option<SegmentAnalysis<'a>>,
    /// Number of combinations evaluated
    pub visited: usize,
}

impl<'a> Outcome<'a> {
    /// Fold in the outcome of a subtree visited after this one
    fn merge(&mut self, later: Outcome<'a>) {
        self.visited += later.visited;
        let replace = match (&self.best, &later.best) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(cur), Some(new)) => {
                new.remaining_len() < cur.remaining_len()
                    || (new.remaining_len() == cur.remaining_len()
                        && new.probability() > cur.probability())
            }
        };

        if replace {
            self.best = later.best;
        }
    }
}

/// Pick the analysis that best explains its line
///
/// Only analyses that matched all of their words qualify. Of those, the ones with the fewest
/// leftover characters are kept, and the most probable one wins; on equal probability the
/// earliest analysis wins. Returns `None` if no analysis qualifies.
pub fn select<'b, 'a>(analyses: &'b [SegmentAnalysis<'a>]) -> Option<&'b SegmentAnalysis<'a>> {
    let complete = analyses
        .iter()
        .filter(|a| a.matched_all_words())
        .collect::<Vec<_>>();

    let shortest = complete.iter().map(|a| a.remaining_len()).min()?;

    let mut best: Option<&'b SegmentAnalysis<'a>> = None;
    for analysis in complete.into_iter().filter(|a| a.remaining_len() == shortest) {
        match best {
            Some(cur) if analysis.probability() <= cur.probability() => {}
            _ => best = Some(analysis),
        }
    }

    best
}
