pub mod codon;
pub mod kmer;
pub mod ops;
pub mod orf;
pub mod record;
pub mod search;

pub use record::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid motif pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    #[error("Insufficient input: {0}")]
    InsufficientInput(String),
}
