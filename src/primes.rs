//! Prime implicant generation (the Quine-McCluskey merging phase).
//!
//! Each pass merges every cube of bucket `k` with every cube of bucket `k + 1`.
//! Cubes that took part in no merge during a pass are prime. Merged cubes form the
//! buckets of the next pass, and the process stops after a pass without merges.
//!
//! Every merge adds a dash, so there are at most `W + 1` passes.

use std::collections::{BTreeSet, HashSet};

use log::{debug, info};

use crate::cube::Cube;
use crate::group::Groups;

/// Computes the prime implicants of the cubes in `groups`.
///
/// The result is deduplicated and sorted lexicographically, which is the
/// enumeration order used by the prime implicant chart.
pub fn prime_implicants(groups: &Groups) -> Vec<Cube> {
    let mut primes = BTreeSet::new();
    let mut current = groups.clone();
    let mut pass = 0;

    loop {
        let (next, used) = merge_pass(&current);
        let merges = used.len();

        for cube in current.cubes() {
            if !used.contains(cube) {
                primes.insert(cube.clone());
            }
        }

        debug!(
            "pass {}: {} cubes took part in merges, next groups: {}",
            pass, merges, next
        );

        if next.is_empty() {
            break;
        }
        current = next;
        pass += 1;
    }

    info!("found {} prime implicants in {} passes", primes.len(), pass + 1);
    primes.into_iter().collect()
}

/// Prime implicants of a set of minterm patterns.
pub fn prime_implicants_of(minterms: &[Cube]) -> Vec<Cube> {
    prime_implicants(&Groups::from_cubes(minterms.iter().cloned()))
}

/// Runs one merging pass.
///
/// Returns the merged cubes, bucketed by ones-count and deduplicated per bucket,
/// together with the set of cubes that were merged at least once.
fn merge_pass(groups: &Groups) -> (Groups, HashSet<Cube>) {
    let mut next = Groups::new();
    let mut used = HashSet::new();

    for key in groups.keys() {
        let (Some(lower), Some(upper)) = (groups.get(key), groups.get(key + 1)) else {
            continue;
        };
        for a in lower {
            for b in upper {
                if let Some(merged) = a.merge(b) {
                    // The differing position was the `1` of `b`, so the result stays in bucket `key`.
                    next.insert_unique(key, merged);
                    used.insert(a.clone());
                    used.insert(b.clone());
                }
            }
        }
    }

    (next, used)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::encode::to_binary;

    fn minterms(numbers: &[u64], width: usize) -> Vec<Cube> {
        numbers.iter().map(|&n| to_binary(n, width)).collect()
    }

    fn strings(cubes: &[Cube]) -> Vec<String> {
        cubes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_cyclic_example() {
        let primes = prime_implicants_of(&minterms(&[0, 1, 2, 5, 6, 7], 3));
        assert_eq!(strings(&primes), vec!["-01", "-10", "0-0", "00-", "1-1", "11-"]);
    }

    #[test]
    fn test_two_passes() {
        // 0, 1, 2 and 3 collapse into 00-- over two passes.
        let primes = prime_implicants_of(&minterms(&[0, 1, 2, 3, 7], 4));
        assert_eq!(strings(&primes), vec!["0-11", "00--"]);
    }

    #[test]
    fn test_terminal_in_early_pass() {
        // 6 = 110 cannot merge with anything, while 0 and 1 merge in the first pass.
        let primes = prime_implicants_of(&minterms(&[0, 1, 6], 3));
        assert_eq!(strings(&primes), vec!["00-", "110"]);
    }

    #[test]
    fn test_single_minterm() {
        let primes = prime_implicants_of(&minterms(&[0], 1));
        assert_eq!(strings(&primes), vec!["0"]);
    }

    #[test]
    fn test_tautology() {
        let primes = prime_implicants_of(&minterms(&[0, 1, 2, 3], 2));
        assert_eq!(strings(&primes), vec!["--"]);
    }

    #[test]
    fn test_empty() {
        assert!(prime_implicants_of(&[]).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let input = minterms(&[0, 2, 5, 6, 7, 8, 10, 12, 13, 14, 15], 4);
        let first = prime_implicants_of(&input);
        let second = prime_implicants_of(&input);
        assert_eq!(first, second);
    }

    #[test]
    fn test_primes_are_maximal() {
        let input = minterms(&[0, 2, 5, 6, 7, 8, 10, 12, 13, 14, 15], 4);
        let primes = prime_implicants_of(&input);
        for p in &primes {
            // Every prime covers only required minterms.
            for m in p.minterms() {
                assert!(input.contains(&to_binary(m, 4)), "{} covers {}", p, m);
            }
            // No other prime strictly contains it.
            for q in &primes {
                if p != q {
                    assert!(!p.minterms().iter().all(|m| q.minterms().contains(m)), "{} inside {}", p, q);
                }
            }
        }
    }
}
