//! Triangular adjacency matrix.

use std::fmt;

use ag_core::{CoreResult, ensure_in_bounds};

/// Lower-triangular matrix of edge multiplicities.
///
/// Row `i` holds `i + 1` entries; the pair `(i, j)` lives at
/// `[max(i, j)][min(i, j)]`, so self-loops sit on the diagonal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct AdjacencyMatrix {
    rows: Vec<Vec<u32>>,
}

impl AdjacencyMatrix {
    /// All-zero matrix for `n` vertices.
    pub fn new(n: usize) -> Self {
        Self {
            rows: (0..n).map(|i| vec![0; i + 1]).collect(),
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    /// Multiplicity between `i` and `j`, in either order.
    pub fn get(&self, i: usize, j: usize) -> CoreResult<u32> {
        let (hi, lo) = ordered(i, j);
        ensure_in_bounds(hi, self.rows.len(), "adjacency row")?;
        Ok(self.rows[hi][lo])
    }

    /// Record a multiplicity reported for `(i, j)`.
    ///
    /// Both endpoints of an edge may report it; the larger report wins.
    pub fn record(&mut self, i: usize, j: usize, multiplicity: u32) -> CoreResult<()> {
        let (hi, lo) = ordered(i, j);
        ensure_in_bounds(hi, self.rows.len(), "adjacency row")?;
        let entry = &mut self.rows[hi][lo];
        *entry = (*entry).max(multiplicity);
        Ok(())
    }

    /// Total edge count, self-loops included.
    pub fn edge_count(&self) -> u64 {
        self.rows.iter().flatten().map(|&m| u64::from(m)).sum()
    }

    /// Non-zero entries as `(i, j, multiplicity)` with `i >= j`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        self.rows.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &m)| m > 0)
                .map(move |(j, &m)| (i, j, m))
        })
    }

    /// Expand to a full symmetric `n x n` matrix.
    pub fn to_square(&self) -> Vec<Vec<u32>> {
        let n = self.rows.len();
        (0..n)
            .map(|i| (0..n).map(|j| self.rows[i.max(j)][i.min(j)]).collect())
            .collect()
    }
}

fn ordered(i: usize, j: usize) -> (usize, usize) {
    if i >= j { (i, j) } else { (j, i) }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{row:?}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ag_core::CoreError;

    #[test]
    fn shape_is_triangular() {
        let m = AdjacencyMatrix::new(4);
        assert_eq!(m.len(), 4);
        for (i, row) in m.rows().iter().enumerate() {
            assert_eq!(row.len(), i + 1);
        }
        assert!(AdjacencyMatrix::new(0).is_empty());
    }

    #[test]
    fn record_is_symmetric_and_keeps_max() {
        let mut m = AdjacencyMatrix::new(3);
        m.record(0, 2, 1).unwrap();
        m.record(2, 0, 2).unwrap();
        m.record(2, 0, 1).unwrap();
        m.record(1, 1, 1).unwrap();

        assert_eq!(m.get(0, 2).unwrap(), 2);
        assert_eq!(m.get(2, 0).unwrap(), 2);
        assert_eq!(m.rows(), &[vec![0], vec![0, 1], vec![2, 0, 0]]);
        assert_eq!(m.edge_count(), 3);
        assert_eq!(m.edges().collect::<Vec<_>>(), vec![(1, 1, 1), (2, 0, 2)]);
    }

    #[test]
    fn out_of_range_is_an_error() {
        let mut m = AdjacencyMatrix::new(2);
        assert!(matches!(
            m.record(0, 2, 1),
            Err(CoreError::IndexOob { index: 2, len: 2, .. })
        ));
        assert!(m.get(5, 0).is_err());
    }

    #[test]
    fn square_and_display() {
        let mut m = AdjacencyMatrix::new(3);
        m.record(0, 1, 1).unwrap();
        assert_eq!(
            m.to_square(),
            vec![vec![0, 1, 0], vec![1, 0, 0], vec![0, 0, 0]]
        );
        assert_eq!(m.to_string(), "[0]\n[1, 0]\n[0, 0, 0]");
    }
}
