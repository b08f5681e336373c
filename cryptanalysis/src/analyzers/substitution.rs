//! Substitution cryptanalysis: frequency-ranked initial key improved by
//! randomized hill-climbing on quadgram scores.

use log::{debug, info, trace, warn};
use rand::Rng;

use crate::analyzers::quadgram::QuadgramCorpus;
use crate::cipher::{CipherKey, Decrypt, SubstitutionKey};
use crate::config::AnalyzerConfig;
use crate::dictionary::Dictionary;
use crate::error::{CryptanalysisError, Result};
use crate::letter_stats::{
    ALPHABET_SIZE, LetterCounts, dictionary_word_matches, letter_frequencies, rank_letters,
};
use crate::utils::{split_words, validate_ciphertext};

/// Initial key from frequency ranks.
///
/// The i-th most frequent ciphertext letter decrypts to the i-th most
/// frequent reference letter. Ties on either side fall back to alphabetical
/// order.
pub fn initial_key(ciphertext: &LetterCounts, reference: &LetterCounts) -> SubstitutionKey {
    SubstitutionKey::from_pairs(&rank_letters(ciphertext), &rank_letters(reference))
}

/// Whether every word of `plaintext` appears in the dictionary.
pub fn check_best_key<D: Dictionary + ?Sized>(plaintext: &str, dictionary: &D) -> bool {
    split_words(plaintext).all(|word| dictionary_word_matches(word, dictionary) > 0)
}

/// Outcome of a single hill-climbing step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Accepted,
    Reverted,
}

/// State of one hill-climbing round.
#[derive(Debug, Clone, PartialEq)]
pub struct HillClimb {
    pub current_key: SubstitutionKey,
    pub current_score: f64,
    pub best_key: SubstitutionKey,
    pub best_score: f64,
}

impl HillClimb {
    pub fn new(key: SubstitutionKey, score: f64) -> Self {
        Self {
            current_key: key,
            current_score: score,
            best_key: key,
            best_score: score,
        }
    }

    /// Swaps two distinct key positions and keeps the swap only if `evaluate`
    /// scores it strictly above the best score so far.
    pub fn try_move<R, F>(&mut self, rng: &mut R, mut evaluate: F) -> Result<Move>
    where
        R: Rng + ?Sized,
        F: FnMut(&SubstitutionKey) -> Result<f64>,
    {
        let a = rng.random_range(0..ALPHABET_SIZE);
        let mut b = rng.random_range(0..ALPHABET_SIZE - 1);
        if b >= a {
            b += 1;
        }

        self.current_key.swap(a, b);
        self.current_score = evaluate(&self.current_key)?;

        if self.current_score > self.best_score {
            trace!("Swap {a}<->{b} accepted, score {:.4}", self.current_score);
            self.best_key = self.current_key;
            self.best_score = self.current_score;
            Ok(Move::Accepted)
        } else {
            self.current_key.swap(a, b);
            self.current_score = self.best_score;
            Ok(Move::Reverted)
        }
    }
}

/// Result of a substitution analysis
#[derive(Debug, Clone, PartialEq)]
pub struct SubstitutionRecovery {
    pub key: SubstitutionKey,
    pub plaintext: String,
    /// Quadgram score of `plaintext`
    pub score: f64,
    /// Rounds run before the search stopped
    pub rounds: usize,
    /// Every plaintext word was found in the dictionary
    pub verified: bool,
}

/// Recovers a substitution key by hill-climbing from the frequency-ranked key.
///
/// Every round restarts from the initial key. The search stops at the first
/// round whose best key decrypts to dictionary words only; otherwise the
/// best-scoring key over all rounds is returned with `verified` unset.
pub fn analyze<D, C, R>(
    ciphertext: &str,
    dictionary: &D,
    reference: &LetterCounts,
    corpus: &QuadgramCorpus,
    cipher: &C,
    config: &AnalyzerConfig,
    rng: &mut R,
) -> Result<SubstitutionRecovery>
where
    D: Dictionary + ?Sized,
    C: Decrypt + ?Sized,
    R: Rng + ?Sized,
{
    validate_ciphertext(ciphertext)?;
    if corpus.is_empty() {
        return Err(CryptanalysisError::EmptyDictionary);
    }

    let evaluate = |key: &SubstitutionKey| -> Result<f64> {
        let plaintext = cipher.decrypt(&CipherKey::Substitution(*key), ciphertext)?;
        Ok(corpus.score(&plaintext))
    };

    let initial = initial_key(&letter_frequencies(ciphertext), reference);
    let initial_score = evaluate(&initial)?;
    debug!("Initial substitution key {initial} scores {initial_score:.4}");

    let mut overall = HillClimb::new(initial, initial_score);

    for round in 0..config.rounds {
        let mut climb = HillClimb::new(initial, initial_score);
        let mut accepted = 0usize;

        for _ in 0..config.moves_per_round {
            if climb.try_move(rng, evaluate)? == Move::Accepted {
                accepted += 1;
            }
        }

        debug!(
            "Round {}: {} swaps accepted, best score {:.4}",
            round + 1,
            accepted,
            climb.best_score
        );

        if round == 0 || climb.best_score > overall.best_score {
            overall = climb.clone();
        }

        let plaintext = cipher.decrypt(&CipherKey::Substitution(climb.best_key), ciphertext)?;
        if check_best_key(&plaintext, dictionary) {
            info!("Substitution key {} verified in round {}", climb.best_key, round + 1);
            return Ok(SubstitutionRecovery {
                key: climb.best_key,
                plaintext,
                score: climb.best_score,
                rounds: round + 1,
                verified: true,
            });
        }
    }

    warn!(
        "No dictionary-valid plaintext after {} rounds, returning best score {:.4}",
        config.rounds, overall.best_score
    );
    let plaintext = cipher.decrypt(&CipherKey::Substitution(overall.best_key), ciphertext)?;

    Ok(SubstitutionRecovery {
        key: overall.best_key,
        plaintext,
        score: overall.best_score,
        rounds: config.rounds,
        verified: false,
    })
}
