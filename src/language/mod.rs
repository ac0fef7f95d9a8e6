pub mod core;
pub mod difficulty;
pub mod store;

// Re-export the main types for convenience
pub use core::{word_list_path, DirWordSource, EmbeddedWordSource, MemoryWordSource, WordSource};
pub use difficulty::{acceleration_reduction, min_word_length, word_count};
pub use store::WordStore;
