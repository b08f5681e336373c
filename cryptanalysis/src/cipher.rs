//! Cipher kinds, keys and the decryption collaborator

use std::fmt;

use crate::error::{CryptanalysisError, Result};
use crate::letter_stats::{ALPHABET_SIZE, rotate_back};

/// The classical ciphers this crate can analyze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherKind {
    RotX,
    Vigenere,
    Substitution,
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherKind::RotX => write!(f, "ROT-X"),
            CipherKind::Vigenere => write!(f, "Vigenere"),
            CipherKind::Substitution => write!(f, "substitution"),
        }
    }
}

/// Monoalphabetic substitution key.
///
/// Index is the cipher letter, value the plain letter it decrypts to.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubstitutionKey {
    map: [u8; ALPHABET_SIZE],
}

impl SubstitutionKey {
    /// Key that maps every letter to itself
    pub fn identity() -> Self {
        Self {
            map: std::array::from_fn(|index| b'A' + index as u8),
        }
    }

    /// Builds a key from plain letters listed in cipher-letter order.
    pub fn from_letters(letters: [u8; ALPHABET_SIZE]) -> Result<Self> {
        let mut seen = [false; ALPHABET_SIZE];
        for &letter in &letters {
            if !letter.is_ascii_uppercase() {
                return Err(CryptanalysisError::InvalidKey(format!(
                    "substitution key contains non-letter {:?}",
                    letter as char
                )));
            }
            let index = (letter - b'A') as usize;
            if seen[index] {
                return Err(CryptanalysisError::InvalidKey(format!(
                    "substitution key maps two letters to {}",
                    letter as char
                )));
            }
            seen[index] = true;
        }
        Ok(Self { map: letters })
    }

    /// Builds a key from cipher and plain letter indices paired up in order.
    ///
    /// Both sides must be permutations of `0..26`.
    pub(crate) fn from_pairs(
        cipher_order: &[u8; ALPHABET_SIZE],
        plain_order: &[u8; ALPHABET_SIZE],
    ) -> Self {
        let mut map = [0u8; ALPHABET_SIZE];
        for (&cipher, &plain) in cipher_order.iter().zip(plain_order) {
            map[cipher as usize] = b'A' + plain;
        }
        Self { map }
    }

    /// Plain letter for a cipher letter. Non-letters pass through unchanged.
    #[inline]
    pub fn plain_for(&self, cipher: u8) -> u8 {
        if cipher.is_ascii_uppercase() {
            self.map[(cipher - b'A') as usize]
        } else {
            cipher
        }
    }

    /// Exchanges the plain letters assigned to two cipher positions.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.map.swap(a, b);
    }

    /// Inverse mapping (plain letter to cipher letter)
    pub fn inverse(&self) -> Self {
        let mut map = [0u8; ALPHABET_SIZE];
        for (cipher, &plain) in self.map.iter().enumerate() {
            map[(plain - b'A') as usize] = b'A' + cipher as u8;
        }
        Self { map }
    }

    pub fn as_bytes(&self) -> &[u8; ALPHABET_SIZE] {
        &self.map
    }

    /// Applies the key to every letter, leaving spaces untouched.
    pub fn apply(&self, text: &str) -> String {
        text.bytes().map(|byte| self.plain_for(byte) as char).collect()
    }
}

impl std::str::FromStr for SubstitutionKey {
    type Err = CryptanalysisError;

    fn from_str(s: &str) -> Result<Self> {
        let letters: [u8; ALPHABET_SIZE] = s.as_bytes().try_into().map_err(|_| {
            CryptanalysisError::InvalidKey(format!(
                "substitution key must be {} letters, got {}",
                ALPHABET_SIZE,
                s.len()
            ))
        })?;
        Self::from_letters(letters)
    }
}

impl fmt::Display for SubstitutionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.map {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for SubstitutionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubstitutionKey({self})")
    }
}

/// A recovered or supplied key, one variant per cipher kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherKey {
    /// Shift in `[1, 25]`; 0 means no shift was found
    Rot(u8),
    /// Uppercase key letters
    Vigenere(String),
    Substitution(SubstitutionKey),
}

impl CipherKey {
    pub fn kind(&self) -> CipherKind {
        match self {
            CipherKey::Rot(_) => CipherKind::RotX,
            CipherKey::Vigenere(_) => CipherKind::Vigenere,
            CipherKey::Substitution(_) => CipherKind::Substitution,
        }
    }

    /// Key length as the decryption collaborator understands it
    pub fn len(&self) -> usize {
        match self {
            CipherKey::Rot(_) => 1,
            CipherKey::Vigenere(key) => key.len(),
            CipherKey::Substitution(_) => ALPHABET_SIZE,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherKey::Rot(shift) => write!(f, "{shift}"),
            CipherKey::Vigenere(key) => write!(f, "{key}"),
            CipherKey::Substitution(key) => write!(f, "{key}"),
        }
    }
}

/// Trait for the decryption collaborator the analyzers call into
pub trait Decrypt {
    /// Applies the inverse of `key`'s cipher to `ciphertext`.
    fn decrypt(&self, key: &CipherKey, ciphertext: &str) -> Result<String>;
}

/// Standard decryption for the three classical ciphers.
///
/// Spaces pass through unchanged. Vigenère key positions advance on every
/// character, spaces included.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicCipher;

impl ClassicCipher {
    pub fn new() -> Self {
        Self
    }
}

impl Decrypt for ClassicCipher {
    fn decrypt(&self, key: &CipherKey, ciphertext: &str) -> Result<String> {
        match key {
            CipherKey::Rot(shift) => {
                if *shift as usize >= ALPHABET_SIZE {
                    return Err(CryptanalysisError::InvalidKey(format!(
                        "shift {shift} out of range"
                    )));
                }
                Ok(ciphertext
                    .bytes()
                    .map(|byte| rotate_back(byte, *shift) as char)
                    .collect())
            }
            CipherKey::Vigenere(key) => {
                if key.is_empty() {
                    return Err(CryptanalysisError::InvalidKey(
                        "Vigenere key cannot be empty".to_string(),
                    ));
                }
                if !key.bytes().all(|byte| byte.is_ascii_uppercase()) {
                    return Err(CryptanalysisError::InvalidKey(format!(
                        "Vigenere key {key:?} must be uppercase letters"
                    )));
                }

                let key_bytes: &[u8] = key.as_bytes();
                Ok(ciphertext
                    .bytes()
                    .enumerate()
                    .map(|(position, byte)| {
                        let shift = key_bytes[position % key_bytes.len()] - b'A';
                        rotate_back(byte, shift) as char
                    })
                    .collect())
            }
            CipherKey::Substitution(key) => Ok(key.apply(ciphertext)),
        }
    }
}
