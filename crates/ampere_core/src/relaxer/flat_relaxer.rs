use crate::{error::RelaxError, matrix::AdjacencyMatrix};

use super::Relaxer;

/// Relaxation over a contiguous row-major buffer.
///
/// Row `k` is copied out before each outer step so that every row update is a
/// plain zip over two slices. With a zero diagonal row `k` does not change
/// during step `k`, so the copy yields exactly the values [`super::scalar_relaxer::ScalarRelaxer`]
/// produces.
pub struct FlatRelaxer;

impl Relaxer for FlatRelaxer {
    fn name(&self) -> &'static str {
        "flat"
    }

    fn relax(&self, matrix: &AdjacencyMatrix) -> Result<AdjacencyMatrix, RelaxError> {
        let n = matrix.dimension();
        let mut entries = matrix.as_slice().to_vec();

        if n == 0 {
            return Ok(AdjacencyMatrix::from_flat(entries, n));
        }

        let mut row_k = vec![0.0; n];

        for k in 0..n {
            row_k.copy_from_slice(&entries[k * n..(k + 1) * n]);

            for row in entries.chunks_exact_mut(n) {
                let via_k = row[k];
                for (ij, &kj) in row.iter_mut().zip(row_k.iter()) {
                    *ij = ij.min(via_k + kj);
                }
            }
        }

        Ok(AdjacencyMatrix::from_flat(entries, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_relaxer_chain() {
        let matrix = AdjacencyMatrix::from_rows(vec![
            vec![0.0, 4.0, f64::INFINITY, f64::INFINITY],
            vec![f64::INFINITY, 0.0, 1.0, f64::INFINITY],
            vec![f64::INFINITY, f64::INFINITY, 0.0, 2.0],
            vec![1.0, f64::INFINITY, f64::INFINITY, 0.0],
        ])
        .unwrap();

        let result = FlatRelaxer.relax(&matrix).unwrap();

        assert_eq!(result.get(0, 3), 7.0);
        assert_eq!(result.get(3, 2), 6.0);
        assert_eq!(result.get(2, 1), 7.0);
        // input untouched
        assert_eq!(matrix.get(0, 3), f64::INFINITY);
    }

    #[test]
    fn test_flat_relaxer_empty() {
        let result = FlatRelaxer.relax(&AdjacencyMatrix::zeros(0)).unwrap();

        assert!(result.is_empty());
    }
}
