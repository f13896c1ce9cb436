use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{element::Element, error::BuildError, matrix::AdjacencyMatrix};

/// How the absence of an element between two nodes is represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingEdge {
    /// Absent edges are stored as `0`, which the relaxation reads as a free hop.
    #[default]
    Zero,
    /// Absent edges are stored as `f64::INFINITY`.
    Unreachable,
}

impl MissingEdge {
    fn empty_weight(&self) -> f64 {
        match self {
            MissingEdge::Zero => 0.0,
            MissingEdge::Unreachable => f64::INFINITY,
        }
    }

    fn has_edge(&self, weight: f64) -> bool {
        match self {
            MissingEdge::Zero => weight != 0.0,
            MissingEdge::Unreachable => weight.is_finite(),
        }
    }
}

/// Weight of two resistances in parallel.
#[inline]
pub fn parallel_combination(a: f64, b: f64) -> f64 {
    1.0 / (1.0 / a + 1.0 / b)
}

pub struct MatrixBuilder {
    matrix: AdjacencyMatrix,
    missing_edge: MissingEdge,
}

impl MatrixBuilder {
    pub fn new(node_count: usize) -> Self {
        MatrixBuilder {
            matrix: AdjacencyMatrix::zeros(node_count),
            missing_edge: MissingEdge::Zero,
        }
    }

    pub fn missing_edge(mut self, missing_edge: MissingEdge) -> Self {
        let node_count = self.matrix.dimension();
        self.matrix = AdjacencyMatrix::filled(node_count, missing_edge.empty_weight());
        self.missing_edge = missing_edge;
        self
    }

    pub fn node_count(&self) -> usize {
        self.matrix.dimension()
    }

    pub fn add_element(&mut self, element: &Element) -> Result<(), BuildError> {
        element.validate(self.node_count())?;

        let from = element.from.get();
        let to = element.to.get();

        // Existing forward edge means a parallel element, both directions get combined
        if self.missing_edge.has_edge(self.matrix.get(from, to)) {
            let forward = parallel_combination(self.matrix.get(from, to), element.forward_resistance);
            let reverse = parallel_combination(self.matrix.get(to, from), element.reverse_resistance);
            self.matrix.set(from, to, forward);
            self.matrix.set(to, from, reverse);
        } else {
            self.matrix.set(from, to, element.forward_resistance);
            self.matrix.set(to, from, element.reverse_resistance);
        }

        debug!(
            "{} {} -> {}: R{}{}={}, R{}{}={}",
            element.kind,
            from,
            to,
            from,
            to,
            self.matrix.get(from, to),
            to,
            from,
            self.matrix.get(to, from)
        );

        Ok(())
    }

    /// Ingests every element once, diodes first, then resistors, then capacitors.
    pub fn build(mut self, elements: &[Element]) -> Result<AdjacencyMatrix, BuildError> {
        let mut ordered: Vec<&Element> = elements.iter().collect();
        ordered.sort_by_key(|element| element.kind);

        for element in ordered {
            self.add_element(element)?;
        }

        Ok(self.matrix)
    }
}

pub fn build_matrix(
    node_count: usize,
    elements: &[Element],
) -> Result<AdjacencyMatrix, BuildError> {
    MatrixBuilder::new(node_count).build(elements)
}
