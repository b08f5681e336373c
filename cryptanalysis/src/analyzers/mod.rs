//! Analyzers for the three cipher kinds and the facade that drives them

pub mod quadgram;
pub mod rotx;
pub mod substitution;
pub mod vigenere;

pub use quadgram::QuadgramCorpus;
pub use rotx::RotXRecovery;
pub use substitution::{HillClimb, Move, SubstitutionRecovery, check_best_key};
pub use vigenere::{CipherMatrix, KeyLengthEstimate, VigenereRecovery};

use log::debug;
use rand::Rng;

use crate::cipher::{CipherKey, CipherKind, ClassicCipher, Decrypt};
use crate::config::AnalyzerConfig;
use crate::dictionary::Dictionary;
use crate::error::{CryptanalysisError, Result};
use crate::letter_stats::{LetterCounts, dictionary_letter_frequencies};

/// Plaintext and key recovered for any cipher kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovery {
    pub plaintext: String,
    pub key: CipherKey,
}

impl From<RotXRecovery> for Recovery {
    fn from(recovery: RotXRecovery) -> Self {
        Self {
            plaintext: recovery.plaintext,
            key: CipherKey::Rot(recovery.shift),
        }
    }
}

impl From<VigenereRecovery> for Recovery {
    fn from(recovery: VigenereRecovery) -> Self {
        Self {
            plaintext: recovery.plaintext,
            key: CipherKey::Vigenere(recovery.key),
        }
    }
}

impl From<SubstitutionRecovery> for Recovery {
    fn from(recovery: SubstitutionRecovery) -> Self {
        Self {
            plaintext: recovery.plaintext,
            key: CipherKey::Substitution(recovery.key),
        }
    }
}

/// Runs the analyzers against one dictionary.
///
/// Dictionary letter frequencies and the quadgram corpus are computed once on
/// construction and shared read-only by every analysis.
#[derive(Debug)]
pub struct Cryptanalyst<D, C = ClassicCipher> {
    dictionary: D,
    cipher: C,
    config: AnalyzerConfig,
    letters: LetterCounts,
    letter_total: u64,
    corpus: QuadgramCorpus,
}

impl<D: Dictionary> Cryptanalyst<D, ClassicCipher> {
    pub fn new(dictionary: D, config: AnalyzerConfig) -> Result<Self> {
        Self::with_cipher(dictionary, ClassicCipher, config)
    }
}

impl<D: Dictionary, C: Decrypt> Cryptanalyst<D, C> {
    /// Builds an analyst around a custom decryption collaborator.
    pub fn with_cipher(dictionary: D, cipher: C, config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;

        let (letters, letter_total) = dictionary_letter_frequencies(&dictionary);
        let corpus = QuadgramCorpus::from_dictionary(&dictionary);
        debug!(
            "Dictionary: {} words, {} letters, {} quadgrams ({} distinct)",
            dictionary.len(),
            letter_total,
            corpus.len(),
            corpus.distinct()
        );

        Ok(Self {
            dictionary,
            cipher,
            config,
            letters,
            letter_total,
            corpus,
        })
    }

    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn corpus(&self) -> &QuadgramCorpus {
        &self.corpus
    }

    /// Aggregate dictionary letter counts and their total
    pub fn reference_letters(&self) -> (&LetterCounts, u64) {
        (&self.letters, self.letter_total)
    }

    pub fn rotx(&self, ciphertext: &str) -> Result<RotXRecovery> {
        rotx::analyze(ciphertext, &self.dictionary, &self.cipher)
    }

    pub fn vigenere(&self, ciphertext: &str) -> Result<VigenereRecovery> {
        vigenere::analyze(
            ciphertext,
            &self.letters,
            self.letter_total,
            &self.cipher,
            self.config.key_lengths.clone(),
        )
    }

    /// Substitution analysis with the random source described by the config.
    pub fn substitution(&self, ciphertext: &str) -> Result<SubstitutionRecovery> {
        let mut rng = self.config.rng();
        self.substitution_with_rng(ciphertext, &mut rng)
    }

    pub fn substitution_with_rng<R: Rng + ?Sized>(
        &self,
        ciphertext: &str,
        rng: &mut R,
    ) -> Result<SubstitutionRecovery> {
        substitution::analyze(
            ciphertext,
            &self.dictionary,
            &self.letters,
            &self.corpus,
            &self.cipher,
            &self.config,
            rng,
        )
    }

    /// Runs the analyzer for `kind`.
    pub fn analyze(&self, kind: CipherKind, ciphertext: &str) -> Result<Recovery> {
        match kind {
            CipherKind::RotX => self.rotx(ciphertext).map(Recovery::from),
            CipherKind::Vigenere => self.vigenere(ciphertext).map(Recovery::from),
            CipherKind::Substitution => self.substitution(ciphertext).map(Recovery::from),
        }
    }

    /// Runs the analyzer for `kind` and writes the plaintext into `plaintext`.
    ///
    /// The plaintext fills the leading bytes of the buffer; the rest is left
    /// untouched. A buffer shorter than the recovered plaintext is rejected
    /// with [`CryptanalysisError::BufferTooSmall`] and not written to.
    pub fn analyze_into(
        &self,
        kind: CipherKind,
        ciphertext: &str,
        plaintext: &mut [u8],
    ) -> Result<CipherKey> {
        let recovery = self.analyze(kind, ciphertext)?;
        let bytes = recovery.plaintext.as_bytes();
        let available = plaintext.len();

        let Some(target) = plaintext.get_mut(..bytes.len()) else {
            return Err(CryptanalysisError::BufferTooSmall {
                needed: bytes.len(),
                available,
            });
        };
        target.copy_from_slice(bytes);
        Ok(recovery.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordList;

    fn analyst() -> Cryptanalyst<WordList> {
        let dictionary: WordList = ["THE", "QUICK", "BROWN", "FOX", "JUMPS", "OVER", "LAZY", "DOG"]
            .into_iter()
            .collect();
        Cryptanalyst::new(dictionary, AnalyzerConfig::default().with_seed(5)).unwrap()
    }

    #[test]
    fn test_precomputed_statistics() {
        let analyst = analyst();
        let (letters, total) = analyst.reference_letters();
        assert_eq!(total, 32);
        // 'O' appears in BROWN, FOX, OVER and DOG
        assert_eq!(letters[14], 4);
        assert_eq!(analyst.corpus().distinct(), 8);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AnalyzerConfig::default().with_key_lengths(3..3);
        let result = Cryptanalyst::new(WordList::default(), config);
        assert!(matches!(result, Err(CryptanalysisError::InvalidConfig(_))));
    }

    #[test]
    fn test_analyze_dispatches_rotx() {
        let recovery = analyst().analyze(CipherKind::RotX, "GUR DHVPX OEBJA SBK").unwrap();
        assert_eq!(recovery.key, CipherKey::Rot(13));
        assert_eq!(recovery.plaintext, "THE QUICK BROWN FOX");
    }

    #[test]
    fn test_analyze_into_buffer() {
        let mut buffer = [0u8; 32];
        let key = analyst()
            .analyze_into(CipherKind::RotX, "GUR SBK", &mut buffer)
            .unwrap();
        assert_eq!(key, CipherKey::Rot(13));
        assert_eq!(&buffer[..7], b"THE FOX");
        assert_eq!(buffer[7], 0);
    }

    #[test]
    fn test_analyze_into_small_buffer() {
        let mut buffer = [0u8; 4];
        let result = analyst().analyze_into(CipherKind::RotX, "GUR SBK", &mut buffer);
        assert_eq!(
            result,
            Err(CryptanalysisError::BufferTooSmall { needed: 7, available: 4 })
        );
    }

    /// Appends an 'X' to whatever the standard cipher produces.
    struct Expanding;

    impl Decrypt for Expanding {
        fn decrypt(&self, key: &CipherKey, ciphertext: &str) -> Result<String> {
            let mut plaintext = ClassicCipher.decrypt(key, ciphertext)?;
            plaintext.push('X');
            Ok(plaintext)
        }
    }

    #[test]
    fn test_analyze_into_sizes_buffer_by_plaintext() {
        let dictionary: WordList = ["ABX"].into_iter().collect();
        let analyst = Cryptanalyst::with_cipher(dictionary, Expanding, AnalyzerConfig::default()).unwrap();

        let mut short = [0u8; 2];
        let result = analyst.analyze_into(CipherKind::RotX, "BC", &mut short);
        assert_eq!(
            result,
            Err(CryptanalysisError::BufferTooSmall { needed: 3, available: 2 })
        );
        assert_eq!(short, [0u8; 2]);

        let mut exact = [0u8; 3];
        let key = analyst.analyze_into(CipherKind::RotX, "BC", &mut exact).unwrap();
        assert_eq!(key, CipherKey::Rot(1));
        assert_eq!(&exact, b"ABX");
    }

    #[test]
    fn test_empty_ciphertext_fails_for_every_kind() {
        let analyst = analyst();
        for kind in [CipherKind::RotX, CipherKind::Vigenere, CipherKind::Substitution] {
            assert_eq!(analyst.analyze(kind, ""), Err(CryptanalysisError::EmptyCiphertext));
        }
    }
}
