use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::mask::ALPHABET_SIZE;

pub const WORD_LENGTH: usize = 5;

/// Number of words in every solution.
pub const SLOTS: usize = 5;

/// Initial number of slot-3 candidates each worker can buffer.
pub const SCRATCH_CAPACITY: usize = 4096;

/// Non-words present in common word lists that would otherwise show up in
/// solutions.
pub const DEFAULT_BLOCKLIST: [&str; 9] = [
    "FLDXT", "HDQRS", "ZHMUD", "SEQWL", "CHIVW", "GCONV", "FCONV", "EXPWY", "PBXES",
];

/// What a worker does when its scratch buffer is full.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CapacityPolicy {
    #[default]
    Grow,
    Fail,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub word_length: usize,
    /// Search the outer slot on several workers.
    pub parallel: bool,
    /// Try words made of rarer letters first.
    pub order_by_frequency: bool,
    /// Uppercase words that are never candidates.
    pub blocklist: HashSet<String>,
    pub scratch_capacity: usize,
    pub capacity_policy: CapacityPolicy,
    /// Worker count; `None` uses rayon's global pool.
    pub threads: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            word_length: WORD_LENGTH,
            parallel: true,
            order_by_frequency: true,
            blocklist: DEFAULT_BLOCKLIST.iter().map(|w| w.to_string()).collect(),
            scratch_capacity: SCRATCH_CAPACITY,
            capacity_policy: CapacityPolicy::default(),
            threads: None,
        }
    }
}

impl Config {
    /// Adds words to the block-list, uppercasing them the same way candidates are.
    pub fn block<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.blocklist
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_ascii_uppercase()));
    }

    pub fn validate(&self) -> Result<()> {
        if self.word_length == 0 {
            return Err(Error::InvalidConfig("word length must be positive".into()));
        }
        if SLOTS * self.word_length > ALPHABET_SIZE as usize {
            return Err(Error::InvalidConfig(format!(
                "{SLOTS} words of length {} need more than {ALPHABET_SIZE} letters",
                self.word_length
            )));
        }
        if self.threads == Some(0) {
            return Err(Error::InvalidConfig("thread count must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_classic_puzzle() {
        let config = Config::default();
        assert_eq!(config.word_length, 5);
        assert!(config.parallel);
        assert!(config.order_by_frequency);
        assert!(config.blocklist.contains("FLDXT"));
        assert_eq!(config.blocklist.len(), DEFAULT_BLOCKLIST.len());
        assert_eq!(config.capacity_policy, CapacityPolicy::Grow);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_block_normalizes() {
        let mut config = Config::default();
        config.block([" waltz\n", "Nymph"]);
        assert!(config.blocklist.contains("WALTZ"));
        assert!(config.blocklist.contains("NYMPH"));
    }

    #[test]
    fn test_block_uppercases_like_candidates() {
        let mut config = Config::default();
        config.block(["maße"]);
        assert!(config.blocklist.contains("MAßE"));
        assert!(!config.blocklist.contains("MASSE"));
    }

    #[test]
    fn test_validate_word_length() {
        let mut config = Config::default();
        config.word_length = 0;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        config.word_length = 6;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        config.word_length = 4;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_threads() {
        let config = Config {
            threads: Some(0),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
