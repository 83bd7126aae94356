//! The pruned enumeration over five word slots.
//!
//! Every loop only looks at indices strictly below the one before it, and no
//! two candidates share a mask, so each set of five words is found exactly
//! once.

use std::time::Instant;

use log::{debug, info, trace};
use rayon::prelude::*;

use crate::collect::{Collector, Solution};
use crate::config::{CapacityPolicy, Config};
use crate::error::{Error, Result};
use crate::mask::LetterMask;
use crate::prepare::CandidateSet;

/// Per-worker buffer of `(index, mask)` pairs for slots 3 to 5.
#[derive(Debug)]
struct Scratch {
    entries: Vec<(usize, LetterMask)>,
    capacity: usize,
    policy: CapacityPolicy,
}

impl Scratch {
    /// A buffer bounded by `capacity`. It never needs more than `candidates`
    /// entries, so that is all it allocates up front.
    fn new(capacity: usize, policy: CapacityPolicy, candidates: usize) -> Self {
        Scratch {
            entries: Vec::with_capacity(capacity.min(candidates)),
            capacity,
            policy,
        }
    }

    /// Replaces the buffer with the candidates below `below` that share no
    /// letter with `used`, in descending index order.
    fn refill(
        &mut self,
        masks: &[LetterMask],
        below: usize,
        used: LetterMask,
    ) -> std::result::Result<(), usize> {
        self.entries.clear();
        self.entries.extend(
            masks[..below]
                .iter()
                .copied()
                .enumerate()
                .rev()
                .filter(|&(_, m)| m & used == 0), // Empty intersection to avoid duplicate letters.
        );
        match self.policy {
            CapacityPolicy::Fail if self.entries.len() > self.capacity => Err(self.capacity),
            _ => Ok(()),
        }
    }
}

/// All solutions whose first (largest) index is `i`.
fn search_first_word(
    i: usize,
    masks: &[LetterMask],
    scratch: &mut Scratch,
    out: &mut Collector,
) -> Result<()> {
    let mask1 = masks[i];
    for j in (0..i).rev() {
        let mask2 = masks[j];
        if mask1 & mask2 != 0 {
            continue;
        }
        let used2 = mask1 | mask2;
        scratch
            .refill(masks, j, used2)
            .map_err(|capacity| Error::ScratchCapacity {
                capacity,
                first: i,
                second: j,
            })?;
        if scratch.entries.len() >= 3 {
            search_last_three(i, j, used2, &scratch.entries, out);
        }
    }
    Ok(())
}

fn search_last_three(
    i: usize,
    j: usize,
    used2: LetterMask,
    entries: &[(usize, LetterMask)],
    out: &mut Collector,
) {
    for (a, &(k, mask3)) in entries.iter().enumerate() {
        let used3 = used2 | mask3;
        for (b, &(l, mask4)) in entries.iter().enumerate().skip(a + 1) {
            if used3 & mask4 != 0 {
                continue;
            }
            let used4 = used3 | mask4;
            for &(m, mask5) in &entries[b + 1..] {
                if used4 & mask5 == 0 {
                    out.add(Solution::new([i, j, k, l, m]));
                }
            }
        }
    }
}

fn search_range(masks: &[LetterMask], config: &Config) -> Result<Collector> {
    let new_scratch =
        || Scratch::new(config.scratch_capacity, config.capacity_policy, masks.len());

    if !config.parallel {
        let mut scratch = new_scratch();
        let mut out = Collector::new();
        for i in (0..masks.len()).rev() {
            search_first_word(i, masks, &mut scratch, &mut out)?;
        }
        return Ok(out);
    }

    (0..masks.len())
        .into_par_iter()
        .rev()
        .try_fold(
            || (new_scratch(), Collector::new()),
            |(mut scratch, mut out), i| {
                search_first_word(i, masks, &mut scratch, &mut out)?;
                trace!("first word #{i}: {} solutions so far", out.len());
                Ok::<_, Error>((scratch, out))
            },
        )
        .map(|r| r.map(|(_, out)| out))
        .try_reduce(Collector::new, |a, b| Ok(a.merge(b)))
}

/// Every set of five candidates with pairwise disjoint letters.
pub fn search(candidates: &CandidateSet, config: &Config) -> Result<Vec<Solution>> {
    config.validate()?;
    let masks = candidates.masks();
    debug_assert!(
        {
            let mut sorted = masks.clone();
            sorted.sort_unstable();
            sorted.windows(2).all(|w| w[0] != w[1])
        },
        "candidate masks must be unique"
    );

    let start = Instant::now();
    let collected = match (config.parallel, config.threads) {
        (true, Some(threads)) => {
            debug!("searching {} candidates on {threads} workers", masks.len());
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?
                .install(|| search_range(&masks, config))?
        }
        _ => search_range(&masks, config)?,
    };
    let solutions = collected.drain();
    info!(
        "found {} solutions among {} candidates in {:.3?}",
        solutions.len(),
        masks.len(),
        start.elapsed()
    );
    Ok(solutions)
}
