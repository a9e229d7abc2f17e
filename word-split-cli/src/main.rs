//! Split concatenated text (such as database column names) into words
//!
//! Reads a `word,probability` lexicon and a file of concatenated lines, and writes one
//! `line,segmented` record per input line, with the line lowercased.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use word_split::{prepare_line, Lexicon, Segmenter, Strategy};

/// Split concatenated text into the most probable sequence of lexicon words
#[derive(Debug, Parser)]
#[command(name = "wordsplit", version)]
struct Args {
    /// CSV file of `word,probability` lines
    #[arg(value_name = "LEXICON")]
    lexicon: PathBuf,

    /// Text file with one concatenated phrase per line
    #[arg(value_name = "CONJOINED")]
    conjoined: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Search used when the greedy pass can't account for every word
    #[arg(short, long, value_enum, default_value = "exhaustive")]
    strategy: SearchStrategy,

    /// Recursion limit for the exhaustive search
    #[arg(long, value_name = "DEPTH")]
    max_depth: Option<usize>,

    /// Segment lines on all cores
    #[arg(short, long)]
    parallel: bool,

    /// Suppress log output
    #[arg(short, long)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SearchStrategy {
    /// Evaluate every combination of candidate words
    Exhaustive,
    /// Best split sequence over text positions
    Positional,
}

impl From<SearchStrategy> for Strategy {
    fn from(strategy: SearchStrategy) -> Self {
        match strategy {
            SearchStrategy::Exhaustive => Strategy::Exhaustive,
            SearchStrategy::Positional => Strategy::Positional,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);
    log::debug!("arguments: {:?}", args);

    let lexicon = Lexicon::open(&args.lexicon)
        .with_context(|| format!("failed to load lexicon {}", args.lexicon.display()))?;
    log::info!(
        "loaded {} words from {}",
        lexicon.len(),
        args.lexicon.display()
    );

    let mut segmenter = Segmenter::new(lexicon);
    segmenter.set_strategy(args.strategy.into());
    if let Some(max_depth) = args.max_depth {
        segmenter.set_max_depth(max_depth);
    }

    let lines = read_lines(&args.conjoined)?;
    let records: Vec<(String, String)> = match args.parallel {
        true => lines.par_iter().map(|l| split(&segmenter, l)).collect(),
        false => lines.iter().map(|l| split(&segmenter, l)).collect(),
    };

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("failed to create output file {}", path.display())
        })?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    for (line, words) in records.iter() {
        writeln!(out, "{},{}", line, words).context("failed to write output")?;
    }

    out.flush().context("failed to write output")?;
    log::info!("segmented {} lines", lines.len());
    Ok(())
}

/// Segment a single line into a `(prepared line, segmented)` record
///
/// Lines too short to split are echoed back trimmed in both fields.
fn split(segmenter: &Segmenter, line: &str) -> (String, String) {
    match prepare_line(line) {
        Some(line) => {
            let words = segmenter.segment(&line);
            (line, words)
        }
        None => {
            let line = line.trim().to_owned();
            (line.clone(), line)
        }
    }
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open input file {}", path.display()))?;

    BufReader::new(file)
        .lines()
        .enumerate()
        .map(|(i, ln)| {
            ln.with_context(|| format!("failed to read {}:{}", path.display(), i + 1))
        })
        .collect()
}

fn init_logging(args: &Args) {
    if args.quiet {
        return;
    }

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
