//! Turning a raw word list into the candidates the search runs over.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use itertools::Itertools;
use log::{debug, info};

use crate::collect::Solution;
use crate::config::{Config, SLOTS};
use crate::error::{Error, Result};
use crate::mask::{try_letter_mask, LetterMask};

/// A word with distinct letters, standing for every anagram of it in the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub word: String,
    pub mask: LetterMask,
    /// Other words with the same letters, in input order.
    pub anagrams: Vec<String>,
}

/// Candidates with pairwise distinct masks. Indices are stable once built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateSet {
    pub(crate) candidates: Vec<Candidate>,
}

impl CandidateSet {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    pub fn masks(&self) -> Vec<LetterMask> {
        self.candidates.iter().map(|c| c.mask).collect()
    }

    /// The representative words of `solution`, in slot order.
    pub fn words(&self, solution: &Solution) -> [&str; SLOTS] {
        solution.indices().map(|i| self.candidates[i].word.as_str())
    }

    /// Every word quintuple `solution` stands for once anagrams are put back.
    pub fn expand_anagrams(&self, solution: &Solution) -> Vec<Vec<&str>> {
        solution
            .indices()
            .into_iter()
            .map(|i| {
                let c = &self.candidates[i];
                std::iter::once(c.word.as_str()).chain(c.anagrams.iter().map(String::as_str))
            })
            .multi_cartesian_product()
            // Sort the 5 words in each solution.
            .map(|sol| sol.into_iter().sorted().collect_vec())
            .sorted()
            .collect()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Filters `raw_words` down to one uppercase word per letter set.
///
/// Words of the wrong length, with a repeated letter, or on the block-list are
/// dropped. A word of the right length containing anything but a letter is an
/// error, since it means the input is not a word list.
pub fn prepare<I, S>(raw_words: I, config: &Config) -> Result<CandidateSet>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    config.validate()?;

    let mut candidates: Vec<Candidate> = Vec::new();
    let mut by_mask: HashMap<LetterMask, usize> = HashMap::new();
    let (mut seen, mut repeated, mut blocked) = (0usize, 0usize, 0usize);

    for raw in raw_words {
        let raw = raw.as_ref().trim();
        if raw.chars().count() != config.word_length {
            continue;
        }
        seen += 1;

        let word = raw.to_ascii_uppercase();
        let mask = try_letter_mask(&word)?;
        if mask.count_ones() as usize != config.word_length {
            repeated += 1;
            continue;
        }
        if config.blocklist.contains(&word) {
            debug!("blocked {word}");
            blocked += 1;
            continue;
        }

        match by_mask.get(&mask) {
            Some(&idx) => candidates[idx].anagrams.push(word),
            None => {
                by_mask.insert(mask, candidates.len());
                candidates.push(Candidate {
                    word,
                    mask,
                    anagrams: Vec::new(),
                });
            }
        }
    }

    info!(
        "{} words of length {}: {repeated} with repeated letters, {blocked} blocked, {} letter sets",
        seen,
        config.word_length,
        candidates.len()
    );
    Ok(CandidateSet { candidates })
}

/// Reads one word per line.
pub fn read_words_from<R: Read>(reader: R) -> Result<Vec<String>> {
    let lines: Vec<String> = BufReader::new(reader).lines().try_collect()?;
    Ok(lines)
}

pub fn read_words(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let wrap = |source| Error::ReadWords {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(wrap)?;
    let words: Vec<String> = BufReader::new(file).lines().try_collect().map_err(wrap)?;
    debug!("read {} lines from {}", words.len(), path.display());
    Ok(words)
}
