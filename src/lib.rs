//! # qmc-rs: exact two-level logic minimization
//!
//! **`qmc-rs`** computes a minimum sum-of-products expression for a Boolean function
//! given by the list of its minterms. It combines the classic **Quine-McCluskey**
//! prime implicant generation with an exact **branch-and-bound** search for a
//! minimum cover of the prime implicant chart.
//!
//! ## How it works
//!
//! 1. Every minterm is encoded as a fixed-width pattern over `{0, 1}` ([`encode`]).
//! 2. Patterns are grouped by their number of ones ([`group`]), and neighbouring
//!    groups are merged pass after pass until nothing merges any more. The cubes left
//!    unmerged are the prime implicants ([`primes`]).
//! 3. The prime implicant chart records which implicants cover each minterm
//!    ([`chart`]). Implicants that are the sole cover of some minterm are essential.
//! 4. The search ([`branch`]) repeatedly simplifies the chart by column and row
//!    dominance ([`reduce`]), prunes with a greedy lower bound ([`bound`]), and
//!    branches on including or excluding one implicant.
//!
//! The cost of a cover is its number of implicants. Every traversal order is fixed
//! (patterns are compared lexicographically, with `-` < `0` < `1`), so the same input
//! always produces the same cover.
//!
//! ## Basic Usage
//!
//! ```rust
//! use qmc_rs::minimize::minimize;
//!
//! let result = minimize(&[0, 1, 2, 5, 6, 7]).unwrap();
//! assert_eq!(result.width, 3);
//! assert_eq!(result.primes.len(), 6);
//! assert_eq!(result.cost(), 3);
//! assert_eq!(result.expression(), "A'C' + B'C + AB");
//! ```
//!
//! Variable `A` is the most significant bit of a term.

pub mod bitset;
pub mod bound;
pub mod branch;
pub mod chart;
pub mod cube;
pub mod encode;
pub mod error;
pub mod group;
pub mod input;
pub mod minimize;
pub mod primes;
pub mod reduce;
