use std::time::Duration;

use tracing::{debug, info};

use crate::{
    error::RelaxError, matrix::AdjacencyMatrix, relaxer::Relaxer, stopwatch::Stopwatch,
};

pub const DEFAULT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone)]
pub struct RelaxerRun {
    pub name: &'static str,
    pub result: AdjacencyMatrix,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct Comparison {
    runs: Vec<RelaxerRun>,
    tolerance: f64,
}

impl Comparison {
    pub fn runs(&self) -> &[RelaxerRun] {
        &self.runs
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Largest entry difference between any run and the first one.
    pub fn max_difference(&self) -> f64 {
        let Some((reference, others)) = self.runs.split_first() else {
            return 0.0;
        };

        others
            .iter()
            .map(|run| {
                reference
                    .result
                    .max_abs_difference(&run.result)
                    .unwrap_or(f64::INFINITY)
            })
            .fold(0.0, f64::max)
    }

    pub fn agrees(&self) -> bool {
        match self.runs.split_first() {
            Some((reference, others)) => others
                .iter()
                .all(|run| reference.result.approx_eq(&run.result, self.tolerance)),
            None => true,
        }
    }
}

/// Runs every relaxer on its own copy of `matrix`, one after the other,
/// and times each call.
pub fn compare(
    matrix: &AdjacencyMatrix,
    relaxers: &[&dyn Relaxer],
    tolerance: f64,
) -> Result<Comparison, RelaxError> {
    let mut runs = Vec::with_capacity(relaxers.len());

    for relaxer in relaxers {
        let input = matrix.clone();
        let stopwatch = Stopwatch::new(relaxer.name());
        let result = relaxer.relax(&input)?;
        let elapsed = stopwatch.elapsed();

        info!("{stopwatch}");
        debug!("{} result: {:?}", relaxer.name(), result);

        runs.push(RelaxerRun {
            name: relaxer.name(),
            result,
            elapsed,
        });
    }

    let comparison = Comparison { runs, tolerance };
    info!(
        "max difference between relaxers: {:e}",
        comparison.max_difference()
    );

    Ok(comparison)
}
