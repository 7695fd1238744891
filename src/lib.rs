//! Pass Forge - targeted password candidate generation for authorized security testing
//!
//! Turns a handful of personal details (names, a birth date, a pet, a city) into a
//! deterministic, duplicate-free guess list, and scores individual passwords.

pub mod error;
pub mod sink;
pub mod strength;
pub mod types;
pub mod wordlist;

// Re-export commonly used types
pub use error::{PassForgeError, Result};
pub use types::{GenerationConfig, GenerationSummary, SeedField, Seeds};

// Re-export main functionality
pub use sink::{FileSink, MemorySink, Sink, StdoutSink};
pub use strength::{analyze, StrengthOracle, StrengthResult, ZxcvbnOracle};
pub use wordlist::{Wordlist, WordlistGenerator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
