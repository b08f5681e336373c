//! Error types for cryptanalysis operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptanalysisError {
    #[error("Ciphertext is empty")]
    EmptyCiphertext,

    #[error("Invalid character {character:?} at position {position} (expected A-Z or space)")]
    InvalidCharacter { character: char, position: usize },

    #[error("No key length candidate produced a usable coincidence statistic")]
    KeyLengthNotFound,

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Dictionary has no usable reference statistics")]
    EmptyDictionary,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Plaintext buffer too small (need {needed} bytes, have {available})")]
    BufferTooSmall { needed: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, CryptanalysisError>;
