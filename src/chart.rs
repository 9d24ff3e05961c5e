//! The prime implicant chart.
//!
//! A chart maps each required minterm (a *column*) to the set of prime implicants
//! covering it. Implicants are referred to by their index into an immutable list
//! shared between all copies of a chart, so a column is just a [`BitSet`] of
//! indices. Columns are kept sorted by minterm pattern and candidates by index,
//! which makes every traversal, and therefore every search decision, reproducible.
//!
//! Cloning a chart deep-copies the columns and shares the implicant list. The
//! branch-and-bound search relies on this: each branch owns an independent chart.
//!
//! A column disappears once it is covered by a selected implicant. A column that is
//! still present but has no candidates left can no longer be covered.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use log::debug;

use crate::bitset::BitSet;
use crate::cube::Cube;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Chart {
    implicants: Rc<[Cube]>,
    pub(crate) columns: BTreeMap<Cube, BitSet>,
}

impl Chart {
    /// Builds the chart of `minterms` against `implicants`.
    ///
    /// The order of `implicants` is the enumeration order of candidates in every
    /// column. Duplicate minterms collapse into one column.
    pub fn new(minterms: &[Cube], implicants: &[Cube]) -> Self {
        let mut columns = BTreeMap::new();
        for minterm in minterms {
            let candidates: BitSet = implicants
                .iter()
                .enumerate()
                .filter(|(_, imp)| imp.covers(minterm))
                .map(|(i, _)| i)
                .collect();
            columns.insert(minterm.clone(), candidates);
        }
        debug!(
            "built chart with {} columns over {} implicants",
            columns.len(),
            implicants.len()
        );
        Self {
            implicants: implicants.into(),
            columns,
        }
    }

    /// All implicants the chart was built with, including those no longer offered.
    pub fn implicants(&self) -> &[Cube] {
        &self.implicants
    }

    pub fn implicant(&self, index: usize) -> &Cube {
        &self.implicants[index]
    }

    /// Index of `cube` in the implicant list.
    pub fn position(&self, cube: &Cube) -> Option<usize> {
        self.implicants.iter().position(|c| c == cube)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = (&Cube, &BitSet)> {
        self.columns.iter()
    }

    pub fn column(&self, minterm: &Cube) -> Option<&BitSet> {
        self.columns.get(minterm)
    }

    /// Implicants covering `minterm`, in enumeration order.
    pub fn candidates(&self, minterm: &Cube) -> Option<Vec<&Cube>> {
        self.columns
            .get(minterm)
            .map(|set| set.iter().map(|i| &self.implicants[i]).collect())
    }

    /// Returns true if every column has been covered.
    pub fn is_covered(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns true if some column has run out of candidates.
    pub fn is_dead_end(&self) -> bool {
        self.columns.values().any(|set| set.is_empty())
    }

    /// Rows of the chart: each implicant still offered somewhere, in enumeration
    /// order, with the ordinals of the columns it covers.
    pub(crate) fn rows(&self) -> Vec<(usize, BitSet)> {
        let mut rows: Vec<Option<BitSet>> = vec![None; self.implicants.len()];
        for (ordinal, set) in self.columns.values().enumerate() {
            for i in set.iter() {
                rows[i].get_or_insert_with(BitSet::default).insert(ordinal);
            }
        }
        rows.into_iter()
            .enumerate()
            .filter_map(|(i, row)| row.map(|r| (i, r)))
            .collect()
    }

    /// The flipped chart: each implicant still offered somewhere, in enumeration
    /// order, with the minterms it covers in column order.
    pub fn flip(&self) -> Vec<(&Cube, Vec<&Cube>)> {
        let minterms: Vec<&Cube> = self.columns.keys().collect();
        self.rows()
            .into_iter()
            .map(|(i, row)| (&self.implicants[i], row.iter().map(|o| minterms[o]).collect()))
            .collect()
    }

    /// Implicants that are the only candidate of some column.
    ///
    /// Listed in column order, without duplicates.
    pub fn essentials(&self) -> Vec<Cube> {
        let mut seen = BitSet::new(self.implicants.len());
        let mut result = Vec::new();
        for set in self.columns.values() {
            if set.len() == 1 {
                if let Some(i) = set.first() {
                    if seen.insert(i) {
                        result.push(self.implicants[i].clone());
                    }
                }
            }
        }
        debug!("found {} essential implicants", result.len());
        result
    }

    /// The implicant to branch on: the first candidate of the first non-empty column.
    pub fn branching_implicant(&self) -> Option<usize> {
        self.columns.values().find_map(|set| set.first())
    }

    /// Commits to implicant `index`: every column it covers is removed.
    pub fn select(&mut self, index: usize) {
        self.columns.retain(|_, set| !set.contains(index));
    }

    /// Rejects implicant `index`: it is withdrawn from every column.
    pub fn exclude(&mut self, index: usize) {
        for set in self.columns.values_mut() {
            set.remove(index);
        }
    }
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (minterm, set) in &self.columns {
            write!(f, "{} |", minterm)?;
            for i in set.iter() {
                write!(f, " {}", self.implicants[i])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
