// Library surface for the CLI binary, integration tests and reuse.
pub mod config;
pub mod error;
pub mod language;
pub mod morse;
pub mod stats;
pub mod word_generator;

pub use error::{Error, Result};
pub use language::{WordSource, WordStore};
pub use word_generator::TrainingWordGenerator;
