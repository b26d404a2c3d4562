// Adapters layer: concrete implementations for external systems (patient data sources).

pub mod source;

pub use source::{InMemorySource, JsonFileSource};
