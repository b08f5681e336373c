//! Tuning parameters for the analyzers

use std::ops::Range;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{CryptanalysisError, Result};

/// Default Friedman key-length window (half-open)
pub const DEFAULT_KEY_LENGTHS: Range<usize> = 6..12;
/// Default number of substitution restarts
pub const DEFAULT_ROUNDS: usize = 10;
/// Default number of swaps tried per restart
pub const DEFAULT_MOVES_PER_ROUND: usize = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Candidate Vigenère key lengths. Keys outside this window are never found.
    pub key_lengths: Range<usize>,
    /// Hill-climbing rounds for the substitution search
    pub rounds: usize,
    /// Swaps tried in each round
    pub moves_per_round: usize,
    /// Seed for the substitution search; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            key_lengths: DEFAULT_KEY_LENGTHS,
            rounds: DEFAULT_ROUNDS,
            moves_per_round: DEFAULT_MOVES_PER_ROUND,
            seed: None,
        }
    }
}

impl AnalyzerConfig {
    pub fn with_key_lengths(mut self, key_lengths: Range<usize>) -> Self {
        self.key_lengths = key_lengths;
        self
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_moves_per_round(mut self, moves_per_round: usize) -> Self {
        self.moves_per_round = moves_per_round;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.key_lengths.is_empty() {
            return Err(CryptanalysisError::InvalidConfig(format!(
                "key length window {:?} is empty",
                self.key_lengths
            )));
        }
        if self.key_lengths.start == 0 {
            return Err(CryptanalysisError::InvalidConfig(
                "key lengths must start at 1 or more".to_string(),
            ));
        }
        if self.rounds == 0 || self.moves_per_round == 0 {
            return Err(CryptanalysisError::InvalidConfig(
                "substitution search needs at least one round and one move".to_string(),
            ));
        }
        Ok(())
    }

    /// Random source for the substitution search
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
