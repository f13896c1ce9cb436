use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MatrixError;

/// Dense N×N matrix of directed edge weights.
///
/// Entries are stored in a flat row-major buffer. To find the index for a pair
/// of nodes, use `index = from * dimension + to`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct AdjacencyMatrix {
    entries: Vec<f64>,
    dimension: usize,
}

impl AdjacencyMatrix {
    pub fn zeros(dimension: usize) -> Self {
        AdjacencyMatrix {
            entries: vec![0.0; dimension * dimension],
            dimension,
        }
    }

    /// Matrix with `off_diagonal` everywhere except the diagonal, which stays 0.
    pub fn filled(dimension: usize, off_diagonal: f64) -> Self {
        let mut matrix = AdjacencyMatrix {
            entries: vec![off_diagonal; dimension * dimension],
            dimension,
        };
        for i in 0..dimension {
            matrix.set(i, i, 0.0);
        }
        matrix
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let dimension = rows.len();

        if let Some((row, values)) = rows
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != dimension)
        {
            return Err(MatrixError::NotSquare {
                row,
                expected: dimension,
                actual: values.len(),
            });
        }

        Ok(AdjacencyMatrix {
            entries: rows.into_iter().flatten().collect(),
            dimension,
        })
    }

    pub(crate) fn from_flat(entries: Vec<f64>, dimension: usize) -> Self {
        debug_assert_eq!(entries.len(), dimension * dimension);
        AdjacencyMatrix { entries, dimension }
    }

    #[inline(always)]
    fn index(&self, from: usize, to: usize) -> usize {
        from * self.dimension + to
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn is_empty(&self) -> bool {
        self.dimension == 0
    }

    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.entries[self.index(from, to)]
    }

    #[inline]
    pub fn set(&mut self, from: usize, to: usize, value: f64) {
        let index = self.index(from, to);
        self.entries[index] = value;
    }

    pub fn row(&self, from: usize) -> &[f64] {
        let start = from * self.dimension;
        &self.entries[start..start + self.dimension]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact panics on 0
        self.entries.chunks_exact(self.dimension.max(1))
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.entries
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.dimension)
            .all(|i| (0..i).all(|j| self.get(i, j) == self.get(j, i)))
    }

    pub fn transpose(&self) -> Self {
        let mut transposed = AdjacencyMatrix::zeros(self.dimension);
        for i in 0..self.dimension {
            for j in 0..self.dimension {
                transposed.set(j, i, self.get(i, j));
            }
        }
        transposed
    }

    /// Largest absolute difference between two matrices of the same dimension.
    /// Equal infinities are treated as identical.
    pub fn max_abs_difference(&self, other: &AdjacencyMatrix) -> Option<f64> {
        if self.dimension != other.dimension {
            return None;
        }

        Some(
            self.entries
                .iter()
                .zip(other.entries.iter())
                .map(|(&a, &b)| if a == b { 0.0 } else { (a - b).abs() })
                .fold(0.0, f64::max),
        )
    }

    pub fn approx_eq(&self, other: &AdjacencyMatrix, tolerance: f64) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().zip(other.entries.iter()).all(|(&a, &b)| {
                a == b || (a - b).abs() <= tolerance * a.abs().max(b.abs()).max(1.0)
            })
    }
}

impl TryFrom<Vec<Vec<f64>>> for AdjacencyMatrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        AdjacencyMatrix::from_rows(rows)
    }
}

impl From<AdjacencyMatrix> for Vec<Vec<f64>> {
    fn from(matrix: AdjacencyMatrix) -> Self {
        matrix.to_rows()
    }
}

impl fmt::Debug for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "AdjacencyMatrix({}x{})", self.dimension, self.dimension)?;
        for row in self.rows() {
            writeln!(f, "{row:?}")?;
        }
        Ok(())
    }
}
