use word_split::{Lexicon, Segmenter};

fn main() {
    let mut lexicon = Lexicon::default();

    lexicon.insert("a", 0.5);
    lexicon.insert("an", 0.6);
    lexicon.insert("art", 0.4);

    let segmenter = Segmenter::new(lexicon);
    let result = segmenter.segment_detailed("aart");

    println!("{} ({:?})", result.text, result.method);
}
