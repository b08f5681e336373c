//! Quadgram language model built from the dictionary

use std::collections::HashMap;

use crate::dictionary::Dictionary;
use crate::utils::split_words;

/// A contiguous run of four letters
pub type Quadgram = [u8; 4];

/// Log-probabilities of every quadgram found in the dictionary words.
///
/// Quadgrams never seen in the dictionary score `ln(1 / corpus size)`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadgramCorpus {
    log_probabilities: HashMap<Quadgram, f64>,
    total: usize,
    floor: f64,
}

impl QuadgramCorpus {
    pub fn from_dictionary<D: Dictionary + ?Sized>(dictionary: &D) -> Self {
        Self::from_words(dictionary.words())
    }

    pub fn from_words<'a, I: IntoIterator<Item = &'a str>>(words: I) -> Self {
        let mut counts: HashMap<Quadgram, usize> = HashMap::new();
        let mut total: usize = 0;

        for word in words {
            for window in word.as_bytes().windows(4) {
                let quadgram: Quadgram = [window[0], window[1], window[2], window[3]];
                *counts.entry(quadgram).or_insert(0) += 1;
                total += 1;
            }
        }

        if total == 0 {
            return Self {
                log_probabilities: HashMap::new(),
                total: 0,
                floor: 0.0,
            };
        }

        let log_probabilities = counts
            .into_iter()
            .map(|(quadgram, count)| (quadgram, (count as f64 / total as f64).ln()))
            .collect();

        Self {
            log_probabilities,
            total,
            floor: (1.0 / total as f64).ln(),
        }
    }

    /// Number of quadgram occurrences in the corpus
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct quadgrams
    pub fn distinct(&self) -> usize {
        self.log_probabilities.len()
    }

    /// Log-probability assigned to unseen quadgrams
    pub fn floor(&self) -> f64 {
        self.floor
    }

    pub fn log_probability(&self, quadgram: &[u8]) -> f64 {
        <&Quadgram>::try_from(quadgram)
            .ok()
            .and_then(|quadgram| self.log_probabilities.get(quadgram))
            .copied()
            .unwrap_or(self.floor)
    }

    /// Sum of quadgram log-probabilities over every word of `plaintext`.
    ///
    /// Higher (closer to zero) is more English-like. Words shorter than four
    /// letters contribute nothing.
    pub fn score(&self, plaintext: &str) -> f64 {
        split_words(plaintext)
            .flat_map(|word| word.as_bytes().windows(4))
            .map(|quadgram| self.log_probability(quadgram))
            .sum()
    }
}
