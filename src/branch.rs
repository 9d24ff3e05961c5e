//! Exact minimum cover by branch-and-bound.
//!
//! Every search node reduces its chart, then either stops (covered, dead end, or
//! pruned by the lower bound) or branches on one implicant: the *include* branch
//! commits to it, the *exclude* branch withdraws it. Each branch works on its own
//! copy of the chart.
//!
//! The cost of a cover is its number of implicants. The best cost found so far is
//! kept in the [`Brancher`] and shared by the whole search tree, so a solution found
//! in one subtree immediately tightens pruning everywhere else.

use log::{debug, info, trace};

use crate::chart::Chart;
use crate::cube::Cube;

/// Counters collected during one search.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct SearchStats {
    /// Search nodes visited.
    pub nodes: usize,
    /// Nodes cut off by the lower bound.
    pub pruned: usize,
    /// Nodes with a column that can no longer be covered.
    pub dead_ends: usize,
    /// Improving solutions found.
    pub solutions: usize,
}

#[derive(Debug, Clone)]
pub struct Brancher {
    reduce: bool,
    prune: bool,
    upper: usize,
    stats: SearchStats,
}

impl Default for Brancher {
    fn default() -> Self {
        Brancher::new()
    }
}

impl Brancher {
    pub fn new() -> Self {
        Self {
            reduce: true,
            prune: true,
            upper: usize::MAX,
            stats: SearchStats::default(),
        }
    }

    /// Enables or disables dominance reduction at each node.
    pub fn with_reduction(mut self, reduce: bool) -> Self {
        self.reduce = reduce;
        self
    }

    /// Enables or disables lower-bound pruning.
    pub fn with_pruning(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    /// Only covers strictly cheaper than `upper` are accepted.
    pub fn with_upper_bound(mut self, upper: usize) -> Self {
        self.upper = upper;
        self
    }

    /// Cost of the best cover found so far (or the initial bound).
    pub fn upper_bound(&self) -> usize {
        self.upper
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Finds a minimum cover of `chart`.
    ///
    /// Returns `None` if no cover is cheaper than the upper bound. Implicants appear
    /// in the order they were committed to.
    pub fn solve(&mut self, chart: &Chart) -> Option<Vec<Cube>> {
        let mut partial = Vec::new();
        let result = self.branch(chart, &mut partial);
        info!(
            "search finished: {} nodes, {} pruned, {} dead ends, {} solutions",
            self.stats.nodes, self.stats.pruned, self.stats.dead_ends, self.stats.solutions
        );
        result.map(|indices| indices.into_iter().map(|i| chart.implicant(i).clone()).collect())
    }

    fn branch(&mut self, chart: &Chart, partial: &mut Vec<usize>) -> Option<Vec<usize>> {
        self.stats.nodes += 1;

        let chart = if self.reduce { chart.reduce() } else { chart.clone() };

        if chart.is_dead_end() {
            trace!("dead end at depth {}", partial.len());
            self.stats.dead_ends += 1;
            return None;
        }

        if chart.is_covered() {
            if partial.len() < self.upper {
                debug!("found cover of cost {} (previous bound {})", partial.len(), self.upper);
                self.upper = partial.len();
                self.stats.solutions += 1;
                return Some(partial.clone());
            }
            return None;
        }

        let bound = partial.len() + if self.prune { chart.lower_bound() } else { 0 };
        if self.prune && bound >= self.upper {
            trace!("pruned at depth {}: bound {} >= {}", partial.len(), bound, self.upper);
            self.stats.pruned += 1;
            return None;
        }

        let pi = chart.branching_implicant()?;
        trace!("branching on {} at depth {}", chart.implicant(pi), partial.len());

        let mut with = chart.clone();
        with.select(pi);
        partial.push(pi);
        let included = self.branch(&with, partial);
        partial.pop();

        if let Some(cover) = &included {
            if cover.len() == bound {
                // Matches the lower bound, nothing cheaper exists below this node.
                return included;
            }
        }

        let mut without = chart;
        without.exclude(pi);
        let excluded = self.branch(&without, partial);

        cheaper(excluded, included)
    }
}

/// The cheaper of two search results. A missing result loses to any cover; on equal
/// cost the second argument wins.
pub fn cheaper<T>(first: Option<Vec<T>>, second: Option<Vec<T>>) -> Option<Vec<T>> {
    match (first, second) {
        (None, s) | (s, None) => s,
        (Some(a), Some(b)) => {
            if a.len() < b.len() {
                Some(a)
            } else {
                Some(b)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::encode::to_binary;
    use crate::primes::prime_implicants_of;

    fn chart_of(numbers: &[u64], width: usize) -> Chart {
        let minterms: Vec<Cube> = numbers.iter().map(|&n| to_binary(n, width)).collect();
        let primes = prime_implicants_of(&minterms);
        Chart::new(&minterms, &primes)
    }

    fn strings(cubes: &[Cube]) -> Vec<String> {
        cubes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_cheaper() {
        assert_eq!(cheaper::<u8>(None, None), None);
        assert_eq!(cheaper(Some(vec![1]), None), Some(vec![1]));
        assert_eq!(cheaper(None, Some(vec![2])), Some(vec![2]));
        assert_eq!(cheaper(Some(vec![1]), Some(vec![2, 3])), Some(vec![1]));
        assert_eq!(cheaper(Some(vec![1, 2]), Some(vec![3])), Some(vec![3]));
        assert_eq!(cheaper(Some(vec![1]), Some(vec![2])), Some(vec![2]));
    }

    #[test]
    fn test_cyclic() {
        let chart = chart_of(&[0, 1, 2, 5, 6, 7], 3);
        let mut brancher = Brancher::new();
        let cover = brancher.solve(&chart).unwrap();
        assert_eq!(strings(&cover), vec!["0-0", "-01", "11-"]);
        assert_eq!(brancher.upper_bound(), 3);
        assert_eq!(brancher.stats().solutions, 1);
    }

    #[test]
    fn test_single() {
        let chart = chart_of(&[0], 1);
        let cover = Brancher::new().solve(&chart).unwrap();
        assert_eq!(strings(&cover), vec!["0"]);
    }

    #[test]
    fn test_empty() {
        let chart = Chart::new(&[], &[]);
        assert_eq!(Brancher::new().solve(&chart), Some(vec![]));
    }

    #[test]
    fn test_upper_bound_too_tight() {
        let chart = chart_of(&[0, 1, 2, 5, 6, 7], 3);
        let mut brancher = Brancher::new().with_upper_bound(3);
        assert_eq!(brancher.solve(&chart), None);
        assert_eq!(brancher.upper_bound(), 3);
    }

    #[test]
    fn test_options_do_not_change_cost() {
        let numbers = [0, 2, 3, 4, 5, 7, 8, 9, 13, 15];
        let chart = chart_of(&numbers, 4);
        let expected = Brancher::new().solve(&chart).unwrap().len();
        for reduce in [false, true] {
            for prune in [false, true] {
                let mut brancher = Brancher::new().with_reduction(reduce).with_pruning(prune);
                let cover = brancher.solve(&chart).unwrap();
                assert_eq!(cover.len(), expected, "reduce = {}, prune = {}", reduce, prune);
            }
        }
    }

    #[test]
    fn test_exclusion_never_fakes_coverage() {
        // Without reduction the exclude branch empties the column of 0. That must
        // count as a dead end, not as a covered chart.
        let chart = chart_of(&[0, 3], 2);
        let mut brancher = Brancher::new().with_reduction(false).with_pruning(false);
        let cover = brancher.solve(&chart).unwrap();
        assert_eq!(strings(&cover), vec!["00", "11"]);
        assert!(brancher.stats().dead_ends > 0);
    }
}
