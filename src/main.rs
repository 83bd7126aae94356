use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use five_words::config::{CapacityPolicy, Config, SCRATCH_CAPACITY, WORD_LENGTH};
use five_words::{prepare, read_words, solve};
use itertools::Itertools;
use log::info;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(
    name = "five_words",
    version,
    about = "Find five words that together use 25 distinct letters",
    after_help = "The reported time covers ordering and search, not reading or preparing the word list."
)]
struct Args {
    /// Word list, one word per line
    #[arg(default_value = "words_alpha.txt")]
    word_file: PathBuf,

    /// Search on a single thread
    #[arg(long)]
    sequential: bool,

    /// Keep input order instead of trying rare-letter words first
    #[arg(long)]
    no_ordering: bool,

    /// Number of worker threads (default: one per core)
    #[arg(long)]
    threads: Option<usize>,

    #[arg(long, default_value_t = WORD_LENGTH)]
    word_length: usize,

    /// Exclude a word (repeatable)
    #[arg(long = "ban", value_name = "WORD")]
    banned: Vec<String>,

    /// File of words to exclude, one per line
    #[arg(long, value_name = "FILE")]
    blocklist: Option<PathBuf>,

    /// Do not exclude the built-in list of non-words
    #[arg(long)]
    no_default_blocklist: bool,

    /// Initial per-worker buffer size for third-word candidates
    #[arg(long, default_value_t = SCRATCH_CAPACITY)]
    scratch_capacity: usize,

    /// Fail instead of growing when the buffer overflows
    #[arg(long)]
    strict_capacity: bool,

    /// Print one solution per anagram combination
    #[arg(long)]
    expand_anagrams: bool,

    /// Output machine-readable JSON
    #[arg(long)]
    json: bool,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct JsonOut<'a> {
    words: usize,
    solutions: Vec<Vec<&'a str>>,
    /// Ordering and search time.
    elapsed_secs: f64,
}

impl Args {
    fn config(&self) -> Result<Config> {
        let mut config = Config {
            word_length: self.word_length,
            parallel: !self.sequential,
            order_by_frequency: !self.no_ordering,
            scratch_capacity: self.scratch_capacity,
            capacity_policy: if self.strict_capacity {
                CapacityPolicy::Fail
            } else {
                CapacityPolicy::Grow
            },
            threads: self.threads,
            ..Config::default()
        };
        if self.no_default_blocklist {
            config.blocklist.clear();
        }
        config.block(&self.banned);
        if let Some(path) = &self.blocklist {
            let words = read_words(path).context("reading block-list")?;
            config.block(words.iter().filter(|w| !w.trim().is_empty()));
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = args.config()?;
    let all_words = read_words(&args.word_file)?;
    info!("{} lines in {}", all_words.len(), args.word_file.display());

    let candidates = prepare(&all_words, &config)
        .with_context(|| format!("preparing {}", args.word_file.display()))?;

    // Only ordering and search are timed.
    let t0 = Instant::now();
    let outcome = solve(candidates, &config)?;
    let secs = t0.elapsed().as_secs_f64();

    let solutions = if args.expand_anagrams {
        outcome.expanded_solutions()
    } else {
        outcome
            .word_solutions()
            .into_iter()
            .map(|sol| sol.into_iter().collect_vec())
            .collect_vec()
    };

    if args.json {
        let out = JsonOut {
            words: outcome.candidates.len(),
            solutions,
            elapsed_secs: secs,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Words: {}", outcome.candidates.len());
        for (n, sol) in solutions.iter().enumerate() {
            println!("-------- Solution {} -------", n + 1);
            println!("{}", sol.iter().join("\n"));
        }
        println!("Found solutions ({}) in {:.1} secs", solutions.len(), secs);
    }
    Ok(())
}
