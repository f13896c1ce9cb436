pub mod error;
pub mod sample;
pub mod schematic;

pub use error::SchematicError;
pub use sample::SAMPLE_SCHEMATIC;
pub use schematic::{Net, Schematic};
