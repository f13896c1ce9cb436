use thiserror::Error;

use crate::element::{ElementKind, NodeIdx};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    #[error("Matrix is not square: row {row} has {actual} columns, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("{kind} references node {node} but the circuit only has {node_count} nodes")]
    NodeOutOfRange {
        kind: ElementKind,
        node: NodeIdx,
        node_count: usize,
    },
    #[error("{kind} between {from} and {to} has invalid resistance {value}")]
    InvalidResistance {
        kind: ElementKind,
        from: NodeIdx,
        to: NodeIdx,
        value: f64,
    },
    #[error("{kind} connects node {node} to itself")]
    SelfLoop { kind: ElementKind, node: NodeIdx },
    #[error("diode between {from} and {to} is missing its reverse resistance")]
    MissingReverseResistance { from: NodeIdx, to: NodeIdx },
    #[error("Node id 0 is not valid, node ids start at 1")]
    ZeroNodeId,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RelaxError {
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
