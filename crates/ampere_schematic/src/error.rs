use ampere_core::error::BuildError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchematicError {
    #[error("Failed to read schematic file")]
    Io(#[from] std::io::Error),
    #[error("Invalid XML: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("Expected <schematics> root element, found <{0}>")]
    UnexpectedRoot(String),
    #[error("<{tag}> on line {line} is missing attribute `{attribute}`")]
    MissingAttribute {
        tag: String,
        attribute: &'static str,
        line: u32,
    },
    #[error("<{tag}> on line {line} has invalid `{attribute}` value {value:?}")]
    InvalidValue {
        tag: String,
        attribute: &'static str,
        value: String,
        line: u32,
    },
    #[error(transparent)]
    Element(#[from] BuildError),
}
