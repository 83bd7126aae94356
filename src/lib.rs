//! Sets of five words that between them use 25 distinct letters.
//!
//! Words are reduced to one bit per letter, anagrams are folded together, and
//! a pruned five-level enumeration over the masks finds every combination
//! whose masks are pairwise disjoint.
//!
//! ```no_run
//! use five_words::{find_quintuples, read_words, Config};
//!
//! let words = read_words("words_alpha.txt")?;
//! let outcome = find_quintuples(&words, &Config::default())?;
//! for solution in &outcome.solutions {
//!     println!("{:?}", outcome.candidates.words(solution));
//! }
//! # Ok::<(), five_words::Error>(())
//! ```

pub mod collect;
pub mod config;
pub mod error;
pub mod mask;
pub mod order;
pub mod prepare;
pub mod search;

pub use collect::{Collector, Solution};
pub use config::{CapacityPolicy, Config};
pub use error::{Error, Result};
pub use mask::{letter_mask, LetterMask};
pub use order::order_by_entropy;
pub use prepare::{prepare, read_words, read_words_from, Candidate, CandidateSet};
pub use search::search;

/// The candidates a search ran over and the solutions it found, as indices
/// into those candidates.
#[derive(Debug)]
pub struct Outcome {
    pub candidates: CandidateSet,
    pub solutions: Vec<Solution>,
}

impl Outcome {
    /// Solutions as representative words, one anagram per letter set.
    pub fn word_solutions(&self) -> Vec<[&str; config::SLOTS]> {
        self.solutions
            .iter()
            .map(|s| self.candidates.words(s))
            .collect()
    }

    /// Solutions as words, with every anagram combination spelled out.
    pub fn expanded_solutions(&self) -> Vec<Vec<&str>> {
        self.solutions
            .iter()
            .flat_map(|s| self.candidates.expand_anagrams(s))
            .collect()
    }
}

/// Prepares `raw_words`, then [`solve`]s.
pub fn find_quintuples<I, S>(raw_words: I, config: &Config) -> Result<Outcome>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    solve(prepare(raw_words, config)?, config)
}

/// Optionally orders prepared candidates, then searches them.
pub fn solve(mut candidates: CandidateSet, config: &Config) -> Result<Outcome> {
    if config.order_by_frequency {
        candidates = order_by_entropy(candidates);
    }
    let solutions = search(&candidates, config)?;
    Ok(Outcome {
        candidates,
        solutions,
    })
}
