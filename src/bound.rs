//! Quick lower bound on the number of implicants still needed.
//!
//! The estimate greedily builds a set of pairwise independent columns: it picks the
//! column with the fewest candidates, then drops every column sharing a candidate
//! with it, and repeats until nothing is left. Independent columns have no common
//! candidate, so each of them needs its own implicant.

use log::trace;

use crate::bitset::BitSet;
use crate::chart::Chart;

impl Chart {
    /// Lower bound on the number of implicants needed to cover the remaining columns.
    ///
    /// Columns without candidates are ignored. Among columns of equal size the first
    /// in column order is picked.
    pub fn lower_bound(&self) -> usize {
        let mut remaining: Vec<&BitSet> = self.columns.values().filter(|set| !set.is_empty()).collect();
        let mut picks = 0;

        while let Some(pick) = remaining.iter().min_by_key(|set| set.len()).copied() {
            remaining.retain(|set| !set.intersects(pick));
            picks += 1;
        }

        trace!("lower_bound = {} over {} columns", picks, self.len());
        picks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::cube::Cube;
    use crate::encode::to_binary;
    use crate::primes::prime_implicants_of;

    fn chart_of(numbers: &[u64], width: usize) -> Chart {
        let minterms: Vec<Cube> = numbers.iter().map(|&n| to_binary(n, width)).collect();
        let primes = prime_implicants_of(&minterms);
        Chart::new(&minterms, &primes)
    }

    #[test]
    fn test_empty() {
        assert_eq!(Chart::new(&[], &[]).lower_bound(), 0);
    }

    #[test]
    fn test_single() {
        assert_eq!(chart_of(&[0], 1).lower_bound(), 1);
    }

    #[test]
    fn test_cyclic() {
        // 000 {0-0, 00-} knocks out 001 and 010, then 101 knocks out 111, then 110.
        assert_eq!(chart_of(&[0, 1, 2, 5, 6, 7], 3).lower_bound(), 3);
    }

    #[test]
    fn test_disjoint_essentials() {
        assert_eq!(chart_of(&[0, 1, 6, 7], 3).lower_bound(), 2);
    }

    #[test]
    fn test_ignores_empty_columns() {
        let mut chart = chart_of(&[0, 7], 3);
        chart.exclude(0);
        assert!(chart.is_dead_end());
        assert_eq!(chart.lower_bound(), 1);
    }

    #[test]
    fn test_tautology() {
        assert_eq!(chart_of(&[0, 1, 2, 3], 2).lower_bound(), 1);
    }
}
