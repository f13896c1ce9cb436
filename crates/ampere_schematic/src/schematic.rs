use std::{path::Path, str::FromStr};

use ampere_core::{
    AdjacencyMatrix, Element, ElementKind, MatrixBuilder, MissingEdge, error::BuildError,
};
use roxmltree::{Document, Node};
use serde::Serialize;
use tracing::debug;

use crate::error::SchematicError;

const ROOT_TAG: &str = "schematics";
const NET_TAG: &str = "net";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Net {
    /// 1-based id as written in the schematic
    pub id: usize,
    pub description: Option<String>,
}

/// Decoded netlist: the declared nets and every recognised element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schematic {
    pub nets: Vec<Net>,
    pub elements: Vec<Element>,
}

fn line(node: &Node) -> u32 {
    node.document().text_pos_at(node.range().start).row
}

fn attribute<'a>(node: &Node<'a, '_>, name: &'static str) -> Result<&'a str, SchematicError> {
    node.attribute(name)
        .ok_or_else(|| SchematicError::MissingAttribute {
            tag: node.tag_name().name().to_string(),
            attribute: name,
            line: line(node),
        })
}

fn parse_attribute<T: FromStr>(node: &Node, name: &'static str) -> Result<T, SchematicError> {
    let value = attribute(node, name)?;
    value
        .trim()
        .parse()
        .map_err(|_| SchematicError::InvalidValue {
            tag: node.tag_name().name().to_string(),
            attribute: name,
            value: value.to_string(),
            line: line(node),
        })
}

fn parse_element(node: &Node, kind: ElementKind) -> Result<Element, SchematicError> {
    let from: usize = parse_attribute(node, "net_from")?;
    let to: usize = parse_attribute(node, "net_to")?;
    let resistance: f64 = parse_attribute(node, "resistance")?;
    let reverse_resistance = if kind.is_asymmetric() {
        Some(parse_attribute::<f64>(node, "reverse_resistance")?)
    } else {
        None
    };

    Ok(Element::from_one_based(
        kind,
        from,
        to,
        resistance,
        reverse_resistance,
    )?)
}

impl Schematic {
    pub fn from_xml_str(text: &str) -> Result<Self, SchematicError> {
        let document = Document::parse(text)?;
        let root = document.root_element();

        if root.tag_name().name() != ROOT_TAG {
            return Err(SchematicError::UnexpectedRoot(
                root.tag_name().name().to_string(),
            ));
        }

        let mut nets = Vec::new();
        let mut elements = Vec::new();

        for node in root.descendants().filter(Node::is_element) {
            let tag = node.tag_name().name();

            if tag == NET_TAG {
                nets.push(Net {
                    id: parse_attribute(&node, "id")?,
                    description: node.attribute("description").map(String::from),
                });
            } else if let Ok(kind) = tag.parse::<ElementKind>() {
                elements.push(parse_element(&node, kind)?);
            } else if tag != ROOT_TAG {
                debug!("Ignoring unknown tag <{}> on line {}", tag, line(&node));
            }
        }

        debug!(
            "Parsed schematic with {} nets and {} elements",
            nets.len(),
            elements.len()
        );

        Ok(Schematic { nets, elements })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchematicError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_xml_str(&text)
    }

    pub fn node_count(&self) -> usize {
        self.nets.len()
    }

    pub fn adjacency_matrix(&self, missing_edge: MissingEdge) -> Result<AdjacencyMatrix, BuildError> {
        MatrixBuilder::new(self.node_count())
            .missing_edge(missing_edge)
            .build(&self.elements)
    }
}

#[cfg(test)]
mod tests {
    use ampere_core::NodeIdx;

    use super::*;
    use crate::sample::SAMPLE_SCHEMATIC;

    #[test]
    fn test_parse_sample() {
        let schematic = Schematic::from_xml_str(SAMPLE_SCHEMATIC).unwrap();

        assert_eq!(schematic.node_count(), 3);
        assert_eq!(schematic.nets[0].description.as_deref(), Some("GND"));
        assert_eq!(schematic.nets[1].description, None);
        assert_eq!(schematic.elements.len(), 4);

        let first = &schematic.elements[0];
        assert_eq!(first.kind, ElementKind::Diode);
        assert_eq!(first.from, NodeIdx::new(0));
        assert_eq!(first.to, NodeIdx::new(2));
        assert_eq!(first.forward_resistance, 84.986);
        assert_eq!(first.reverse_resistance, 19295131.171);

        let capacitor = &schematic.elements[3];
        assert_eq!(capacitor.kind, ElementKind::Capacitor);
        assert_eq!(capacitor.reverse_resistance, capacitor.forward_resistance);
    }

    #[test]
    fn test_diode_requires_reverse_resistance() {
        let text = r#"<schematics><net id="1"/><net id="2"/>
<diode net_from="1" net_to="2" resistance="5"/></schematics>"#;

        let result = Schematic::from_xml_str(text);

        assert!(matches!(
            result,
            Err(SchematicError::MissingAttribute {
                attribute: "reverse_resistance",
                line: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_resistance_value() {
        let text = r#"<schematics><net id="1"/><net id="2"/>
<resistor net_from="1" net_to="2" resistance="abc"/></schematics>"#;

        let result = Schematic::from_xml_str(text);

        assert!(matches!(
            result,
            Err(SchematicError::InvalidValue { ref value, .. }) if value == "abc"
        ));
    }

    #[test]
    fn test_unexpected_root() {
        let result = Schematic::from_xml_str("<circuit/>");

        assert!(matches!(result, Err(SchematicError::UnexpectedRoot(tag)) if tag == "circuit"));
    }

    #[test]
    fn test_unknown_tags_are_ignored() {
        let text = r#"<schematics><net id="1"/><inductor net_from="1" net_to="1"/></schematics>"#;

        let schematic = Schematic::from_xml_str(text).unwrap();

        assert_eq!(schematic.node_count(), 1);
        assert!(schematic.elements.is_empty());
    }

    #[test]
    fn test_zero_node_id() {
        let text = r#"<schematics><net id="1"/>
<resistor net_from="0" net_to="1" resistance="1"/></schematics>"#;

        assert!(matches!(
            Schematic::from_xml_str(text),
            Err(SchematicError::Element(BuildError::ZeroNodeId))
        ));
    }
}
