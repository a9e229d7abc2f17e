use once_cell::sync::Lazy;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use word_split::{Lexicon, Method, Segmenter, Strategy};

static SEGMENTER: Lazy<Segmenter> = Lazy::new(|| {
    Segmenter::from_iters(vec![
        ("the", 0.9),
        ("cat", 0.8),
        ("sat", 0.7),
        ("on", 0.95),
        ("mat", 0.6),
    ])
});

static AMBIGUOUS: Lazy<Segmenter> =
    Lazy::new(|| Segmenter::from_iters(vec![("a", 0.5), ("an", 0.6), ("art", 0.4)]));

macro_rules! assert_segments {
    ($list:expr) => {
        let result = SEGMENTER.segment_detailed(&$list.join(""));
        assert_eq!(result.text, $list.join(" "));
        assert_eq!(result.method, Method::Greedy);
    };
}

#[test]
fn test_segment_0() {
    assert_segments!(&["the", "cat", "sat", "on", "the", "mat"]);
}

#[test]
fn test_segment_1() {
    assert_segments!(&["cat", "on", "mat"]);
}

#[test]
fn test_segment_2() {
    assert_segments!(&["the", "mat", "sat", "on", "the", "cat"]);
}

#[test]
fn test_segment_3() {
    assert_segments!(&["on", "on", "on"]);
}

#[test]
fn ambiguous_overlap() {
    let result = AMBIGUOUS.segment_detailed("aart");
    assert_eq!(result.text, "a art");
    assert_eq!(result.method, Method::Exhaustive);
}

#[test]
fn many_overlapping_candidates() {
    let segmenter =
        Segmenter::from_iters(vec![("ab", 0.5), ("ba", 0.4), ("aba", 0.3), ("bab", 0.2)]);
    let result = segmenter.segment_detailed("abababababababab");
    assert_eq!(result.text, "ab aba bab abababab");
    assert_eq!(result.method, Method::Exhaustive);
}

#[test]
fn no_lexicon_words() {
    assert_eq!(SEGMENTER.segment("xyzzy"), "xyzzy");
    assert_eq!(SEGMENTER.segment("  xyzzy "), "xyzzy");
    assert_eq!(SEGMENTER.segment("x"), "x");
    assert_eq!(SEGMENTER.segment(""), "");
}

#[test]
fn unknown_text_between_words() {
    assert_eq!(SEGMENTER.segment("thedogsat"), "the dog sat");
    assert_eq!(SEGMENTER.segment("catxyz"), "cat xyz");
}

#[test]
fn unparsable_scores_never_contribute() {
    let lexicon = Lexicon::load("the,0.9\ncat,lots\n".as_bytes()).unwrap();
    assert!(!lexicon.contains("cat"));

    let segmenter = Segmenter::new(lexicon);
    assert_eq!(segmenter.candidates("thecat").len(), 1);
    assert_eq!(segmenter.segment("thecat"), "the cat");
}

#[test]
fn deterministic() {
    let lines = ["aart", "artaart", "aaartart", "anart"];
    for line in lines.iter() {
        assert_eq!(AMBIGUOUS.segment(line), AMBIGUOUS.segment(line));
    }
}

#[test]
fn strategies_agree_on_clean_input() {
    let mut positional = Segmenter::from_iters(vec![("a", 0.5), ("an", 0.6), ("art", 0.4)]);
    positional.set_strategy(Strategy::Positional);

    let result = positional.segment_detailed("aart");
    assert_eq!(result.text, AMBIGUOUS.segment("aart"));
    assert_eq!(result.method, Method::Positional);
}

#[test]
fn concurrent_lines() {
    let lines = vec![
        "thecatsatonthemat",
        "aart",
        "catonmat",
        "thedogsat",
        "xyzzy",
        "matsat",
    ];

    let sequential = lines
        .iter()
        .map(|l| (SEGMENTER.segment(l), AMBIGUOUS.segment(l)))
        .collect::<Vec<_>>();
    let parallel = lines
        .par_iter()
        .map(|l| (SEGMENTER.segment(l), AMBIGUOUS.segment(l)))
        .collect::<Vec<_>>();

    assert_eq!(sequential, parallel);
}
