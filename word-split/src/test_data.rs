#![cfg(feature = "__test_data")]

use std::path::PathBuf;

use super::{Lexicon, Method, Segmenter};
use crate::test_cases::check_segments;

#[test]
fn test_data() {
    crate::test_cases::run(&segmenter(crate_data_dir()));
}

#[test]
fn lexicon_file() {
    let segmenter = segmenter(crate_data_dir());
    let lexicon = segmenter.lexicon();

    // The header line survives with the default score, the one-letter word does not
    assert_eq!(lexicon.len(), 15);
    assert!(!lexicon.contains("word"));
    assert!(!lexicon.contains("a"));
    assert!(lexicon.contains("zip"));
}

#[test]
fn overlapping_words() {
    let segmenter = segmenter(crate_data_dir());
    let result = segmenter.segment_detailed("lastupdated");
    assert_eq!(result.text, "last updated");
    assert_eq!(result.method, Method::Exhaustive);

    let result = segmenter.segment_detailed("thecatsatonthemat");
    assert_eq!(result.method, Method::Greedy);

    assert!(check_segments(&["order", "date"], &segmenter));
    assert!(!check_segments(&["zip", "xy", "z"], &segmenter));
}

pub fn segmenter(dir: PathBuf) -> Segmenter {
    let file = dir.join("en-lexicon.csv");
    let lexicon =
        Lexicon::open(&file).unwrap_or_else(|e| panic!("error loading {:?}: {}", file, e));
    Segmenter::new(lexicon)
}

pub fn crate_data_dir() -> PathBuf {
    PathBuf::from(format!("{}/../data", env!("CARGO_MANIFEST_DIR")))
}
