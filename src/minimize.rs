//! End-to-end minimization: terms in, minimum sum-of-products out.
//!
//! ```text
//! integers -> encode -> group -> primes -> chart -> essentials
//!                                              \--> branch-and-bound -> cover
//! ```

use std::collections::HashSet;

use log::info;

use crate::branch::{Brancher, SearchStats};
use crate::chart::Chart;
use crate::cube::{expression, Cube};
use crate::encode::{to_binary, width};
use crate::error::{Error, Result};
use crate::group::Groups;
use crate::primes::prime_implicants;

/// Options of a [`Minimizer`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MinimizerConfig {
    /// Number of variables. Derived from the largest term if `None`.
    pub width: Option<usize>,
    /// Apply dominance reduction at each search node.
    pub reduce: bool,
    /// Prune the search with the greedy lower bound.
    pub prune: bool,
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        Self {
            width: None,
            reduce: true,
            prune: true,
        }
    }
}

/// Everything computed along the way to a minimum cover.
#[derive(Debug, Clone)]
pub struct Minimization {
    /// Number of variables.
    pub width: usize,
    /// Each distinct input term with its pattern, in input order.
    pub encodings: Vec<(u64, Cube)>,
    /// The initial grouping of minterm patterns by ones-count.
    pub groups: Groups,
    /// Prime implicants in enumeration order.
    pub primes: Vec<Cube>,
    /// The unreduced prime implicant chart.
    pub chart: Chart,
    /// Implicants that are the sole cover of some minterm in the unreduced chart.
    pub essentials: Vec<Cube>,
    /// A minimum cover, in the order the search committed to its implicants.
    pub cover: Vec<Cube>,
    pub stats: SearchStats,
}

impl Minimization {
    /// The cover as a sum-of-products expression, e.g. `A'C' + B'C + AB`.
    pub fn expression(&self) -> String {
        expression(&self.cover)
    }

    /// The essential implicants as a sum-of-products expression.
    pub fn essential_expression(&self) -> String {
        expression(&self.essentials)
    }

    /// Number of implicants in the cover.
    pub fn cost(&self) -> usize {
        self.cover.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Minimizer {
    config: MinimizerConfig,
}

impl Minimizer {
    pub fn new(config: MinimizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MinimizerConfig {
        &self.config
    }

    /// Minimizes the function that is true on `minterms`.
    ///
    /// Don't-care terms are accepted but treated exactly like required minterms.
    pub fn minimize(&self, minterms: &[u64], dont_cares: &[u64]) -> Result<Minimization> {
        let mut seen = HashSet::with_capacity(minterms.len() + dont_cares.len());
        let terms: Vec<u64> = minterms
            .iter()
            .chain(dont_cares)
            .copied()
            .filter(|&t| seen.insert(t))
            .collect();

        let required = width(&terms);
        let width = match self.config.width {
            Some(w) if w > 64 => return Err(Error::WidthTooLarge { width: w }),
            Some(w) if w < required => return Err(Error::WidthTooSmall { width: w, required }),
            Some(w) => w,
            None => required,
        };
        info!("minimizing {} terms over {} variables", terms.len(), width);

        let encodings: Vec<(u64, Cube)> = terms.iter().map(|&t| (t, to_binary(t, width))).collect();
        let patterns: Vec<Cube> = encodings.iter().map(|(_, c)| c.clone()).collect();

        let groups = Groups::from_cubes(patterns.iter().cloned());
        let primes = prime_implicants(&groups);
        let chart = Chart::new(&patterns, &primes);
        let essentials = chart.essentials();

        let mut brancher = Brancher::new()
            .with_reduction(self.config.reduce)
            .with_pruning(self.config.prune);
        let cover = match brancher.solve(&chart) {
            Some(cover) => cover,
            None => panic!(
                "no cover of {} minterms by {} prime implicants: implicant generation is inconsistent",
                patterns.len(),
                primes.len()
            ),
        };
        info!("minimum cover has {} implicants", cover.len());

        Ok(Minimization {
            width,
            encodings,
            groups,
            primes,
            chart,
            essentials,
            cover,
            stats: brancher.stats(),
        })
    }
}

/// Minimizes `minterms` with the default configuration.
pub fn minimize(minterms: &[u64]) -> Result<Minimization> {
    Minimizer::default().minimize(minterms, &[])
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn strings(cubes: &[Cube]) -> Vec<String> {
        cubes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_cyclic_fixture() {
        let result = minimize(&[0, 1, 2, 5, 6, 7]).unwrap();
        assert_eq!(result.width, 3);
        assert_eq!(strings(&result.primes), vec!["-01", "-10", "0-0", "00-", "1-1", "11-"]);
        assert!(result.essentials.is_empty());
        assert_eq!(strings(&result.cover), vec!["0-0", "-01", "11-"]);
        assert_eq!(result.expression(), "A'C' + B'C + AB");
        assert_eq!(result.cost(), 3);
    }

    #[test]
    fn test_encodings() {
        let result = minimize(&[5, 0, 2]).unwrap();
        let encodings: Vec<(u64, String)> = result.encodings.iter().map(|(n, c)| (*n, c.to_string())).collect();
        assert_eq!(
            encodings,
            vec![(5, "101".to_string()), (0, "000".to_string()), (2, "010".to_string())]
        );
    }

    #[test]
    fn test_single_zero() {
        let result = minimize(&[0]).unwrap();
        assert_eq!(result.width, 1);
        assert_eq!(strings(&result.primes), vec!["0"]);
        assert_eq!(strings(&result.cover), vec!["0"]);
        assert_eq!(result.expression(), "A'");
    }

    #[test]
    fn test_empty() {
        let result = minimize(&[]).unwrap();
        assert_eq!(result.width, 0);
        assert!(result.primes.is_empty());
        assert!(result.essentials.is_empty());
        assert!(result.cover.is_empty());
        assert_eq!(result.expression(), "");
    }

    #[test]
    fn test_dont_cares_are_required() {
        let minimizer = Minimizer::default();
        let with = minimizer.minimize(&[0, 1], &[2, 3]).unwrap();
        let plain = minimizer.minimize(&[0, 1, 2, 3], &[]).unwrap();
        assert_eq!(with.cover, plain.cover);
        assert_eq!(with.expression(), "1");
    }

    #[test]
    fn test_duplicates_collapse() {
        let result = Minimizer::default().minimize(&[1, 1, 3], &[3]).unwrap();
        assert_eq!(result.encodings.len(), 2);
        assert_eq!(strings(&result.cover), vec!["-1"]);
    }

    #[test]
    fn test_duplicates_keep_first_occurrence_order() {
        let minterms: Vec<u64> = (0..64).rev().chain(0..64).collect();
        let result = Minimizer::default().minimize(&minterms, &[63, 7]).unwrap();
        assert_eq!(result.encodings.len(), 64);
        let order: Vec<u64> = result.encodings.iter().map(|(n, _)| *n).collect();
        assert_eq!(order, (0..64).rev().collect::<Vec<u64>>());
        assert_eq!(result.expression(), "1");
    }

    #[test]
    fn test_explicit_width() {
        let config = MinimizerConfig {
            width: Some(4),
            ..Default::default()
        };
        let result = Minimizer::new(config).minimize(&[0, 1], &[]).unwrap();
        assert_eq!(result.width, 4);
        assert_eq!(strings(&result.cover), vec!["000-"]);
        assert_eq!(result.expression(), "A'B'C'");
    }

    #[test]
    fn test_width_errors() {
        let small = Minimizer::new(MinimizerConfig {
            width: Some(2),
            ..Default::default()
        });
        assert_eq!(
            small.minimize(&[4], &[]).unwrap_err(),
            Error::WidthTooSmall { width: 2, required: 3 }
        );

        let large = Minimizer::new(MinimizerConfig {
            width: Some(65),
            ..Default::default()
        });
        assert_eq!(large.minimize(&[1], &[]).unwrap_err(), Error::WidthTooLarge { width: 65 });
    }

    #[test]
    fn test_essentials() {
        // 0, 1 only by 00-, 6, 7 only by 11-; 3 is covered by 0-1 or -11.
        let result = minimize(&[0, 1, 3, 6, 7]).unwrap();
        assert_eq!(strings(&result.essentials), vec!["00-", "11-"]);
        assert_eq!(result.essential_expression(), "A'B' + AB");
        for e in &result.essentials {
            assert!(result.cover.contains(e));
        }
        assert_eq!(result.cost(), 3);
    }
}
