use crate::Segmenter;

/// Run a segmenter against the built-in test cases
pub fn run(segmenter: &Segmenter) {
    assert_eq!(segmenter.segment(""), "");

    let mut success = true;
    for test in TEST_CASES.iter().copied() {
        success &= assert_segments(test, segmenter);
    }

    assert!(success);
}

pub fn assert_segments(s: &[&str], segmenter: &Segmenter) -> bool {
    let actual = segmenter.segment(&s.join(""));
    let cmp = actual.split(' ').collect::<Vec<_>>();
    let success = cmp == s;
    if !success {
        println!("expected: {:?}", s);
        println!("actual:   {:?}\n", cmp);
    }
    success
}

pub fn check_segments(s: &[&str], segmenter: &Segmenter) -> bool {
    segmenter.segment(&s.join("")) == s.join(" ")
}

/// Built-in test cases
///
/// These are exposed so that you can test with different lexicons.
pub const TEST_CASES: &[&[&str]] = &[
    &["the", "cat", "sat", "on", "the", "mat"],
    &["customer", "name"],
    &["first", "name"],
    &["order", "date"],
    &["zip", "code"],
    &["zip", "xyz"],
    &["last", "updated"],
    &["cat", "on", "mat"],
];
