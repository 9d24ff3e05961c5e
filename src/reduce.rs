//! Dominance reduction of the prime implicant chart.
//!
//! **Column dominance.** If the candidates of column `cj` are a subset of the
//! candidates of column `ci`, then any cover of `cj` also covers `ci`, so `ci` is
//! removed. Of several identical columns the last one in column order survives:
//! a column that has already been removed never serves as a witness.
//!
//! **Row dominance.** If the minterms covered by implicant `rj` are a subset of
//! those covered by `ri`, then `ri` can replace `rj` in any cover at no extra cost,
//! so `rj` is withdrawn from every column. Of several identical rows the first one
//! in enumeration order survives, again because a purged row is never a witness.
//! Since every column offering `rj` also offers `ri`, no column becomes empty.
//!
//! One call to [`Chart::reduce`] runs one column pass followed by one row pass.
//! The search reduces again at every node, so the chart converges across calls.

use log::debug;

use crate::bitset::BitSet;
use crate::chart::Chart;
use crate::cube::Cube;

impl Chart {
    /// Returns a copy of the chart with one column pass and one row pass applied.
    pub fn reduce(&self) -> Chart {
        let mut reduced = self.clone();
        let columns = reduced.dominate_columns();
        let rows = reduced.dominate_rows();
        debug!(
            "reduce: removed {} columns, purged {} rows, {} columns left",
            columns,
            rows,
            reduced.len()
        );
        reduced
    }

    /// Removes dominated columns. Returns the number of columns removed.
    pub fn dominate_columns(&mut self) -> usize {
        let columns: Vec<(&Cube, &BitSet)> = self.columns.iter().collect();
        let n = columns.len();
        let mut removed = vec![false; n];

        for i in 0..n {
            let ci = columns[i].1;
            for j in 0..n {
                if i == j || removed[j] {
                    continue;
                }
                let cj = columns[j].1;
                if !cj.is_empty() && cj.is_subset(ci) {
                    removed[i] = true;
                    break;
                }
            }
        }

        let keys: Vec<Cube> = columns
            .iter()
            .zip(&removed)
            .filter(|&(_, &r)| r)
            .map(|((minterm, _), _)| (*minterm).clone())
            .collect();
        for key in &keys {
            debug!("column {} is dominated", key);
            self.columns.remove(key);
        }
        keys.len()
    }

    /// Withdraws dominated implicants from every column. Returns the number purged.
    pub fn dominate_rows(&mut self) -> usize {
        let rows = self.rows();
        let n = rows.len();
        let mut purged = vec![false; n];

        for a in 0..n {
            if purged[a] {
                continue;
            }
            let ra = &rows[a].1;
            for b in 0..n {
                if a == b || purged[b] {
                    continue;
                }
                let rb = &rows[b].1;
                if !rb.is_empty() && rb.is_subset(ra) {
                    purged[b] = true;
                }
            }
        }

        let mut count = 0;
        for ((index, _), _) in rows.iter().zip(&purged).filter(|&(_, &p)| p) {
            debug!("row {} is dominated", self.implicant(*index));
            self.exclude(*index);
            count += 1;
        }
        count
    }
}
