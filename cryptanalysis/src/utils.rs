//! Utility functions shared by the analyzers

use crate::error::{CryptanalysisError, Result};

/// Checks that the ciphertext uses only `A`-`Z` and spaces and holds at least
/// one letter. Invalid characters are reported by character index.
pub fn validate_ciphertext(ciphertext: &str) -> Result<()> {
    if let Some((position, character)) = ciphertext
        .chars()
        .enumerate()
        .find(|&(_, c)| !(c.is_ascii_uppercase() || c == ' '))
    {
        return Err(CryptanalysisError::InvalidCharacter {
            character,
            position,
        });
    }

    if !ciphertext.bytes().any(|byte| byte.is_ascii_uppercase()) {
        return Err(CryptanalysisError::EmptyCiphertext);
    }
    Ok(())
}

/// Splits text on spaces, skipping the empty tokens produced by repeated spaces.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').filter(|word| !word.is_empty())
}
