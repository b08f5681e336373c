//! # Cryptanalysis Library
//!
//! Ciphertext-only attacks on three classical ciphers. Every analyzer works on
//! uppercase English text where the space is the only non-letter character.
//!
//! ## Supported Ciphers
//!
//! - **ROT-X** - all 25 shifts are tried and scored by dictionary word matches
//! - **Vigenère** - key length via Friedman's coincidence test, then each key
//!   letter via chi-squared against the dictionary's letter distribution
//! - **Substitution** - frequency-ranked initial key improved by randomized
//!   hill-climbing on quadgram log-probabilities
//!
//! ## Usage
//!
//! ```rust
//! use cryptanalysis::{AnalyzerConfig, CipherKey, CipherKind, Cryptanalyst, WordList};
//!
//! let dictionary: WordList = ["THE", "QUICK", "BROWN", "FOX"].into_iter().collect();
//! let analyst = Cryptanalyst::new(dictionary, AnalyzerConfig::default())?;
//!
//! let recovery = analyst.analyze(CipherKind::RotX, "GUR DHVPX OEBJA SBK")?;
//! assert_eq!(recovery.key, CipherKey::Rot(13));
//! assert_eq!(recovery.plaintext, "THE QUICK BROWN FOX");
//! # Ok::<(), cryptanalysis::CryptanalysisError>(())
//! ```
//!
//! Results are best-effort. A Vigenère key whose length falls outside
//! [`AnalyzerConfig::key_lengths`] is never found, and the substitution search
//! is probabilistic; check [`SubstitutionRecovery::verified`] before trusting
//! its output.

// Public modules
pub mod analyzers;
pub mod cipher;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod letter_stats;
pub mod utils;

// Re-exports for easy access
pub use analyzers::{
    Cryptanalyst, Recovery, RotXRecovery, SubstitutionRecovery, VigenereRecovery,
};
pub use cipher::{CipherKey, CipherKind, ClassicCipher, Decrypt, SubstitutionKey};
pub use config::AnalyzerConfig;
pub use dictionary::{Dictionary, WordList};
pub use error::{CryptanalysisError, Result};
pub use letter_stats::{
    LetterStats, dictionary_letter_frequencies, dictionary_word_matches, letter_frequencies,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
