use crate::{
    error::{MatrixError, RelaxError},
    matrix::AdjacencyMatrix,
};

use super::Relaxer;

/// Straightforward triple loop over a nested `Vec<Vec<f64>>` copy.
pub struct ScalarRelaxer;

impl Relaxer for ScalarRelaxer {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn relax(&self, matrix: &AdjacencyMatrix) -> Result<AdjacencyMatrix, RelaxError> {
        let rows = relax_rows(matrix.to_rows())?;
        Ok(AdjacencyMatrix::from_rows(rows)?)
    }
}

/// Relaxes a raw grid in place and returns it. The grid must be square.
pub fn relax_rows(mut rows: Vec<Vec<f64>>) -> Result<Vec<Vec<f64>>, RelaxError> {
    let n = rows.len();

    if let Some((row, values)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
        return Err(MatrixError::NotSquare {
            row,
            expected: n,
            actual: values.len(),
        }
        .into());
    }

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                rows[i][j] = rows[i][j].min(rows[i][k] + rows[k][j]);
            }
        }
    }

    Ok(rows)
}
