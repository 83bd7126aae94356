//! Putting words made of rare letters first, so the search prunes earlier.

use itertools::Itertools;
use log::debug;

use crate::mask::{mask_letters, LetterMask, ALPHABET_SIZE};
use crate::prepare::CandidateSet;

/// How many candidates contain each letter.
pub fn letter_frequencies(candidates: &CandidateSet) -> [u64; ALPHABET_SIZE as usize] {
    let mut counts = [0u64; ALPHABET_SIZE as usize];
    for c in candidates {
        for (n, count) in counts.iter_mut().enumerate() {
            if c.mask & (1 << n) != 0 {
                *count += 1;
            }
        }
    }
    counts
}

fn score(mask: LetterMask, freqs: &[u64; ALPHABET_SIZE as usize]) -> u64 {
    freqs
        .iter()
        .enumerate()
        .filter(|(n, _)| mask & (1 << n) != 0)
        .map(|(_, f)| f)
        .sum()
}

/// Candidates sorted by ascending total letter frequency. Ties keep their
/// input order.
pub fn order_by_entropy(candidates: CandidateSet) -> CandidateSet {
    let freqs = letter_frequencies(&candidates);
    if log::log_enabled!(log::Level::Debug) {
        let ranked = (0..ALPHABET_SIZE)
            .sorted_by_key(|&n| freqs[n as usize])
            .map(|n| mask_letters(1 << n))
            .join("");
        debug!("letters from rarest to commonest: {ranked}");
    }

    let candidates = candidates
        .candidates
        .into_iter()
        .sorted_by_key(|c| score(c.mask, &freqs))
        .collect_vec();
    CandidateSet { candidates }
}
