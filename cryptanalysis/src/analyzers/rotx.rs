//! ROT-X cryptanalysis by exhaustive shift search

use log::{debug, info, warn};

use crate::cipher::{CipherKey, Decrypt};
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::letter_stats::{ALPHABET_SIZE, dictionary_word_matches};
use crate::utils::{split_words, validate_ciphertext};

/// Result of a ROT-X analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotXRecovery {
    /// Winning shift, or 0 when no shift produced a dictionary word
    pub shift: u8,
    pub plaintext: String,
    /// Dictionary matches summed over all words of `plaintext`
    pub matches: usize,
}

impl RotXRecovery {
    pub fn is_found(&self) -> bool {
        self.shift != 0
    }
}

/// Total dictionary matches over every space-separated word of `text`.
pub fn count_word_matches<D: Dictionary + ?Sized>(text: &str, dictionary: &D) -> usize {
    split_words(text)
        .map(|word| dictionary_word_matches(word, dictionary))
        .sum()
}

/// Tries every shift in `[1, 25]` and keeps the one with the most dictionary
/// word matches.
///
/// Only a strictly greater match count replaces the current best, so ties go
/// to the lowest shift. If no shift matches anything the recovery carries
/// shift 0 and the ciphertext unchanged.
pub fn analyze<D, C>(ciphertext: &str, dictionary: &D, cipher: &C) -> Result<RotXRecovery>
where
    D: Dictionary + ?Sized,
    C: Decrypt + ?Sized,
{
    validate_ciphertext(ciphertext)?;

    let mut best = RotXRecovery {
        shift: 0,
        plaintext: ciphertext.to_string(),
        matches: 0,
    };

    for shift in 1..ALPHABET_SIZE as u8 {
        let decryption = cipher.decrypt(&CipherKey::Rot(shift), ciphertext)?;
        let matches = count_word_matches(&decryption, dictionary);
        debug!("Shift {shift}: {matches} dictionary matches");

        if matches > best.matches {
            best = RotXRecovery {
                shift,
                plaintext: decryption,
                matches,
            };
        }
    }

    if best.is_found() {
        info!("ROT-X shift {} ({} dictionary matches)", best.shift, best.matches);
    } else {
        warn!("No ROT-X shift produced a dictionary word");
    }

    Ok(best)
}
