pub mod builder;
pub mod comparison;
pub mod element;
pub mod error;
pub mod matrix;
pub mod relaxer;
pub mod stopwatch;
mod utils;

pub use builder::{MatrixBuilder, MissingEdge, build_matrix, parallel_combination};
pub use comparison::{Comparison, DEFAULT_TOLERANCE, RelaxerRun, compare};
pub use element::{Element, ElementKind, NodeIdx};
pub use matrix::AdjacencyMatrix;
pub use relaxer::{Relaxer, RelaxerKind, flat_relaxer::FlatRelaxer, scalar_relaxer::ScalarRelaxer};
