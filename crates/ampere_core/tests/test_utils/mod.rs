#![allow(dead_code)]

use ampere_core::{AdjacencyMatrix, Element, ElementKind, NodeIdx};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// The 3-node, 4-element reference circuit with 0-based node indices.
pub fn reference_elements() -> Vec<Element> {
    vec![
        Element::diode(NodeIdx::new(0), NodeIdx::new(2), 84.986, 19295131.171),
        Element::diode(NodeIdx::new(0), NodeIdx::new(1), 128.445, 19629496.476),
        Element::symmetric(ElementKind::Resistor, NodeIdx::new(2), NodeIdx::new(0), 1000.0),
        Element::symmetric(
            ElementKind::Capacitor,
            NodeIdx::new(2),
            NodeIdx::new(1),
            423074289.097,
        ),
    ]
}

/// Random matrix with a zero diagonal and positive weights. A share of the
/// off-diagonal entries is left as `missing`.
pub fn random_matrix(rng: &mut SmallRng, dimension: usize, symmetric: bool, missing: f64) -> AdjacencyMatrix {
    let mut matrix = AdjacencyMatrix::filled(dimension, missing);

    for i in 0..dimension {
        for j in 0..dimension {
            if i == j || (symmetric && j < i) || rng.random_bool(0.25) {
                continue;
            }

            let weight = rng.random_range(0.5..1000.0);
            matrix.set(i, j, weight);
            if symmetric {
                matrix.set(j, i, weight);
            }
        }
    }

    matrix
}

pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}
