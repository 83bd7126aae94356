use itertools::Itertools;

use crate::config::SLOTS;

/// Candidate indices of five words with pairwise disjoint letters, strictly
/// descending so each combination has exactly one representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Solution([usize; SLOTS]);

impl Solution {
    pub fn new(indices: [usize; SLOTS]) -> Self {
        debug_assert!(
            indices.iter().tuple_windows().all(|(a, b)| a > b),
            "solution indices must be strictly descending: {indices:?}"
        );
        Solution(indices)
    }

    pub fn indices(&self) -> [usize; SLOTS] {
        self.0
    }
}

/// Solutions found by one worker. Workers never share a collector; their
/// collectors are merged once they are done.
#[derive(Debug, Default)]
pub struct Collector {
    solutions: Vec<Solution>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, solution: Solution) {
        self.solutions.push(solution);
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn merge(mut self, other: Collector) -> Collector {
        if self.solutions.len() < other.solutions.len() {
            return other.merge(self);
        }
        self.solutions.extend(other.solutions);
        self
    }

    /// Everything collected, in ascending order.
    pub fn drain(self) -> Vec<Solution> {
        let mut solutions = self.solutions;
        solutions.sort_unstable();
        solutions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_everything() {
        let mut a = Collector::new();
        a.add(Solution::new([9, 7, 5, 3, 1]));
        a.add(Solution::new([4, 3, 2, 1, 0]));
        let mut b = Collector::new();
        b.add(Solution::new([8, 6, 4, 2, 0]));
        assert!(Collector::new().is_empty());

        let merged = b.merge(a);
        assert_eq!(merged.len(), 3);
        assert_eq!(
            merged.drain(),
            [
                Solution::new([4, 3, 2, 1, 0]),
                Solution::new([8, 6, 4, 2, 0]),
                Solution::new([9, 7, 5, 3, 1]),
            ]
        );
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_rejects_unordered_indices() {
        Solution::new([0, 1, 2, 3, 4]);
    }
}
