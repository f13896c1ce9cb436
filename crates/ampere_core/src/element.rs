use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::BuildError;

crate::define_index_newtype!(NodeIdx);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Diode,
    Resistor,
    Capacitor,
}

impl ElementKind {
    /// Processing order used when ingesting elements into a matrix.
    pub const ALL: [ElementKind; 3] = [
        ElementKind::Diode,
        ElementKind::Resistor,
        ElementKind::Capacitor,
    ];

    /// A diode conducts differently in each direction.
    pub fn is_asymmetric(&self) -> bool {
        matches!(self, ElementKind::Diode)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Diode => "diode",
            ElementKind::Resistor => "resistor",
            ElementKind::Capacitor => "capacitor",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown element kind: {s}"))
    }
}

/// A two-terminal component between two nodes.
///
/// `forward_resistance` is the weight from `from` to `to`, `reverse_resistance`
/// the weight in the other direction. Both are equal unless the element is a
/// diode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub kind: ElementKind,
    pub from: NodeIdx,
    pub to: NodeIdx,
    pub forward_resistance: f64,
    pub reverse_resistance: f64,
}

impl Element {
    pub fn symmetric(kind: ElementKind, from: NodeIdx, to: NodeIdx, resistance: f64) -> Self {
        Element {
            kind,
            from,
            to,
            forward_resistance: resistance,
            reverse_resistance: resistance,
        }
    }

    pub fn diode(from: NodeIdx, to: NodeIdx, resistance: f64, reverse_resistance: f64) -> Self {
        Element {
            kind: ElementKind::Diode,
            from,
            to,
            forward_resistance: resistance,
            reverse_resistance,
        }
    }

    /// Builds an element from 1-based node ids as found in schematics.
    /// `reverse_resistance` is only used for asymmetric kinds.
    pub fn from_one_based(
        kind: ElementKind,
        from_id: usize,
        to_id: usize,
        resistance: f64,
        reverse_resistance: Option<f64>,
    ) -> Result<Self, BuildError> {
        if from_id == 0 || to_id == 0 {
            return Err(BuildError::ZeroNodeId);
        }

        let from = NodeIdx::new(from_id - 1);
        let to = NodeIdx::new(to_id - 1);

        match (kind.is_asymmetric(), reverse_resistance) {
            (true, Some(reverse)) => Ok(Element {
                kind,
                from,
                to,
                forward_resistance: resistance,
                reverse_resistance: reverse,
            }),
            (true, None) => Err(BuildError::MissingReverseResistance { from, to }),
            (false, _) => Ok(Element::symmetric(kind, from, to, resistance)),
        }
    }

    pub fn validate(&self, node_count: usize) -> Result<(), BuildError> {
        // the diagonal must stay 0
        if self.from == self.to {
            return Err(BuildError::SelfLoop {
                kind: self.kind,
                node: self.from,
            });
        }

        for node in [self.from, self.to] {
            if node.get() >= node_count {
                return Err(BuildError::NodeOutOfRange {
                    kind: self.kind,
                    node,
                    node_count,
                });
            }
        }

        for value in [self.forward_resistance, self.reverse_resistance] {
            if !value.is_finite() || value <= 0.0 {
                return Err(BuildError::InvalidResistance {
                    kind: self.kind,
                    from: self.from,
                    to: self.to,
                    value,
                });
            }
        }

        Ok(())
    }
}
