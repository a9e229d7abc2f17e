#![cfg(feature = "__test_data")]

use bencher::{benchmark_group, benchmark_main, Bencher};

use word_split::test_data::{crate_data_dir, segmenter};
use word_split::Strategy;

benchmark_group!(benches, short, long, overlapping, positional);
benchmark_main!(benches);

fn short(bench: &mut Bencher) {
    let segmenter = segmenter(crate_data_dir());
    bench.iter(|| {
        let _ = segmenter.segment("zipcode");
    });
}

fn long(bench: &mut Bencher) {
    let segmenter = segmenter(crate_data_dir());
    bench.iter(|| {
        let _ = segmenter.segment("thecatsatonthemat");
    });
}

fn overlapping(bench: &mut Bencher) {
    let segmenter = segmenter(crate_data_dir());
    bench.iter(|| {
        let _ = segmenter.segment("customerlastupdatedorderdate");
    });
}

fn positional(bench: &mut Bencher) {
    let mut segmenter = segmenter(crate_data_dir());
    segmenter.set_strategy(Strategy::Positional);
    bench.iter(|| {
        let _ = segmenter.segment("customerlastupdatedorderdate");
    });
}
