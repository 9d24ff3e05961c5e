//! Buckets of cubes keyed by their number of `1` positions.
//!
//! Two cubes can only merge if their ones-counts differ by exactly one, so each
//! Quine-McCluskey pass only compares neighbouring buckets.

use std::collections::BTreeMap;
use std::fmt;

use log::debug;

use crate::cube::Cube;

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Groups {
    buckets: BTreeMap<usize, Vec<Cube>>,
}

impl Groups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buckets `cubes` by ones-count, keeping first-seen order inside each bucket.
    pub fn from_cubes(cubes: impl IntoIterator<Item = Cube>) -> Self {
        let mut groups = Self::new();
        for cube in cubes {
            groups.push(cube);
        }
        debug!("grouped into {} buckets: {}", groups.buckets.len(), groups);
        groups
    }

    /// Appends `cube` to its bucket.
    pub fn push(&mut self, cube: Cube) {
        self.buckets.entry(cube.ones()).or_default().push(cube);
    }

    /// Appends `cube` to the bucket `key` unless it is already there.
    ///
    /// Returns `true` if the cube was added.
    pub fn insert_unique(&mut self, key: usize, cube: Cube) -> bool {
        let bucket = self.buckets.entry(key).or_default();
        if bucket.contains(&cube) {
            false
        } else {
            bucket.push(cube);
            true
        }
    }

    pub fn get(&self, key: usize) -> Option<&[Cube]> {
        self.buckets.get(&key).map(|v| v.as_slice())
    }

    /// Occupied keys in ascending order. Empty buckets never exist.
    pub fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Cube])> {
        self.buckets.iter().map(|(&k, v)| (k, v.as_slice()))
    }

    /// All cubes, bucket by bucket.
    pub fn cubes(&self) -> impl Iterator<Item = &Cube> {
        self.buckets.values().flatten()
    }

    /// Number of occupied buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl fmt::Display for Groups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, cubes) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            write!(f, "{}:", key)?;
            for c in cubes {
                write!(f, " {}", c)?;
            }
        }
        Ok(())
    }
}
