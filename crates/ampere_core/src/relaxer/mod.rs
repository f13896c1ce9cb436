use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::RelaxError, matrix::AdjacencyMatrix};

pub mod flat_relaxer;
pub mod scalar_relaxer;

pub use scalar_relaxer::relax_rows;

/// All-pairs relaxation over an adjacency matrix.
///
/// For every intermediate node `k`, then every pair `(i, j)`:
/// `result[i][j] = min(result[i][j], result[i][k] + result[k][j])`.
/// Implementations never mutate their input.
pub trait Relaxer {
    fn name(&self) -> &'static str;

    fn relax(&self, matrix: &AdjacencyMatrix) -> Result<AdjacencyMatrix, RelaxError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelaxerKind {
    Scalar,
    Flat,
}

impl RelaxerKind {
    pub const ALL: [RelaxerKind; 2] = [RelaxerKind::Scalar, RelaxerKind::Flat];

    pub fn relaxer(&self) -> Box<dyn Relaxer> {
        match self {
            RelaxerKind::Scalar => Box::new(scalar_relaxer::ScalarRelaxer),
            RelaxerKind::Flat => Box::new(flat_relaxer::FlatRelaxer),
        }
    }
}

impl fmt::Display for RelaxerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelaxerKind::Scalar => f.write_str("scalar"),
            RelaxerKind::Flat => f.write_str("flat"),
        }
    }
}

impl FromStr for RelaxerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scalar" => Ok(RelaxerKind::Scalar),
            "flat" => Ok(RelaxerKind::Flat),
            _ => Err(format!("Unknown relaxer: {s} (expected scalar or flat)")),
        }
    }
}
