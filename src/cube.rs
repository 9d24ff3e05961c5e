//! Cubes: fixed-width patterns over `{0, 1, -}`.
//!
//! A cube of width `W` denotes a subset of the `W`-dimensional Boolean space.
//! Positions holding `0` or `1` are *literals*; a `-` position has been eliminated
//! by merging and matches either value.
//!
//! Minterms are cubes without any `-`. Prime implicants are the maximal cubes
//! produced by Quine-McCluskey merging.
//!
//! Position `0` is the most significant bit and is rendered as variable `A`.
//!
//! The ordering of cubes is the lexicographic ordering of their string form
//! (`-` < `0` < `1`), which fixes every enumeration order in the chart.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A single position of a cube.
///
/// The declaration order matches the ASCII order of the rendered characters,
/// so that the derived `Ord` agrees with string comparison.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Bit {
    /// Eliminated position, rendered as `-`.
    Dash,
    Zero,
    One,
}

impl Bit {
    pub fn to_char(self) -> char {
        match self {
            Bit::Dash => '-',
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }

    pub fn from_char(c: char) -> Option<Bit> {
        match c {
            '-' => Some(Bit::Dash),
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        }
    }

    pub fn is_dash(self) -> bool {
        self == Bit::Dash
    }
}

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Cube {
    bits: Box<[Bit]>,
}

impl Cube {
    pub fn new(bits: impl Into<Box<[Bit]>>) -> Self {
        Self { bits: bits.into() }
    }

    /// The zero-width cube (the single point of the 0-dimensional space).
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn width(&self) -> usize {
        self.bits.len()
    }

    pub fn bits(&self) -> &[Bit] {
        &self.bits
    }

    /// Number of `1` positions. This is the group key used during merging.
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b == Bit::One).count()
    }

    /// Number of `-` positions.
    pub fn dashes(&self) -> usize {
        self.bits.iter().filter(|b| b.is_dash()).count()
    }

    /// Returns `true` if the cube has no `-` positions.
    pub fn is_minterm(&self) -> bool {
        self.dashes() == 0
    }

    /// Returns `true` if every literal of `self` agrees with the corresponding bit of `minterm`.
    ///
    /// # Panics
    ///
    /// Panics if the widths differ.
    pub fn covers(&self, minterm: &Cube) -> bool {
        assert_eq!(self.width(), minterm.width(), "Cannot compare cubes of different width");
        self.bits
            .iter()
            .zip(minterm.bits.iter())
            .all(|(&b, &m)| b.is_dash() || b == m)
    }

    /// Merges two cubes differing in exactly one position.
    ///
    /// Dashes take part in the comparison like any other character, so they must
    /// line up in both operands. The result is `self` with the differing position
    /// replaced by `-`.
    ///
    /// # Panics
    ///
    /// Panics if the widths differ.
    pub fn merge(&self, other: &Cube) -> Option<Cube> {
        assert_eq!(self.width(), other.width(), "Cannot merge cubes of different width");

        let mut diff = None;
        for (i, (a, b)) in self.bits.iter().zip(other.bits.iter()).enumerate() {
            if a != b {
                if diff.is_some() {
                    return None;
                }
                diff = Some(i);
            }
        }

        let i = diff?;
        let mut bits = self.bits.clone();
        bits[i] = Bit::Dash;
        Some(Cube { bits })
    }

    /// Literals as `(position, polarity)` pairs, skipping dashes.
    pub fn literals(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        self.bits.iter().enumerate().filter_map(|(i, &b)| match b {
            Bit::Dash => None,
            Bit::Zero => Some((i, false)),
            Bit::One => Some((i, true)),
        })
    }

    /// All integers covered by this cube, in ascending order.
    pub fn minterms(&self) -> Vec<u64> {
        let width = self.width();
        let base = self
            .bits
            .iter()
            .fold(0u64, |acc, &b| (acc << 1) | (b == Bit::One) as u64);
        let free: Vec<u32> = self
            .bits
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_dash())
            .map(|(i, _)| (width - 1 - i) as u32)
            .collect();

        let mut result: Vec<u64> = (0u64..1 << free.len())
            .map(|choice| {
                free.iter()
                    .enumerate()
                    .filter(|&(k, _)| choice & (1 << k) != 0)
                    .fold(base, |acc, (_, &shift)| acc | (1 << shift))
            })
            .collect();
        result.sort_unstable();
        result
    }

    /// Renders the product term, e.g. `0-1` becomes `A'C`.
    ///
    /// A cube without literals is the constant `1`.
    pub fn to_term(&self) -> String {
        let mut term = String::new();
        for (i, positive) in self.literals() {
            term.push_str(&variable_name(i));
            if !positive {
                term.push('\'');
            }
        }
        if term.is_empty() {
            term.push('1');
        }
        term
    }
}

/// Name of the variable at `position`: `A`..`Z`, then `x26`, `x27`, ...
pub fn variable_name(position: usize) -> String {
    if position < 26 {
        char::from(b'A' + position as u8).to_string()
    } else {
        format!("x{}", position)
    }
}

/// Sum-of-products rendering of a cover. The empty cover renders as the empty string.
pub fn expression<'a>(cover: impl IntoIterator<Item = &'a Cube>) -> String {
    cover.into_iter().map(|c| c.to_term()).collect::<Vec<_>>().join(" + ")
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.bits.iter() {
            write!(f, "{}", b.to_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cube({})", self)
    }
}

impl FromStr for Cube {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .chars()
            .map(Bit::from_char)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| Error::InvalidPattern { pattern: s.to_string() })?;
        Ok(Cube::new(bits))
    }
}
