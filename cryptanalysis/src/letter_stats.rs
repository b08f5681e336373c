//! Letter statistics shared by all analyzers

use crate::dictionary::Dictionary;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Occurrence count per letter, `A` at index 0
pub type LetterCounts = [u32; ALPHABET_SIZE];

/// Letter counter with configurable case handling.
///
/// The default counts only uppercase `A`-`Z`, which is the alphabet every
/// analyzer works on. A case-insensitive counter folds `a`-`z` onto the same
/// slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterStats {
    pub case_sensitive: bool,
}

impl Default for LetterStats {
    fn default() -> Self {
        Self { case_sensitive: true }
    }
}

impl LetterStats {
    pub fn case_insensitive() -> Self {
        Self { case_sensitive: false }
    }

    /// Counts the frequency of each letter in the given text.
    ///
    /// # Arguments
    ///
    /// * `text` - The input text to analyze.
    ///
    /// # Returns
    ///
    /// An array of 26 frequencies for letters A-Z. Characters outside the
    /// counted alphabet (spaces included) are ignored.
    pub fn count(&self, text: &str) -> LetterCounts {
        let mut frequencies: LetterCounts = [0; ALPHABET_SIZE];

        for &byte in text.as_bytes() {
            let byte = if self.case_sensitive {
                byte
            } else {
                byte.to_ascii_uppercase()
            };
            if byte.is_ascii_uppercase() {
                frequencies[(byte - b'A') as usize] += 1;
            }
        }

        frequencies
    }
}

/// Counts uppercase letters `A`-`Z` in `text`; everything else is ignored.
pub fn letter_frequencies(text: &str) -> LetterCounts {
    LetterStats::default().count(text)
}

/// Sums letter frequencies over every dictionary word.
///
/// Returns the per-letter counts together with their total.
pub fn dictionary_letter_frequencies<D: Dictionary + ?Sized>(dictionary: &D) -> (LetterCounts, u64) {
    let mut frequencies: LetterCounts = [0; ALPHABET_SIZE];

    for word in dictionary.words() {
        for (total, count) in frequencies.iter_mut().zip(letter_frequencies(word)) {
            *total += count;
        }
    }

    let total = frequencies.iter().map(|&count| u64::from(count)).sum();
    (frequencies, total)
}

/// Number of dictionary entries exactly equal to `word`.
///
/// This is a linear scan of the dictionary.
pub fn dictionary_word_matches<D: Dictionary + ?Sized>(word: &str, dictionary: &D) -> usize {
    dictionary.words().filter(|&entry| entry == word).count()
}

/// Total letters in a frequency table
pub fn total(counts: &LetterCounts) -> u32 {
    counts.iter().sum()
}

/// Calculates the Index of Coincidence (IC) for a frequency table.
///
/// # Returns
///
/// `None` when fewer than two letters were counted, since `N(N-1)` is zero.
pub fn index_of_coincidence(counts: &LetterCounts) -> Option<f64> {
    let total = u64::from(total(counts));
    if total < 2 {
        return None;
    }

    // Sum of f(f - 1) over all letters
    let numerator: u64 = counts
        .iter()
        .map(|&freq| u64::from(freq) * u64::from(freq.saturating_sub(1)))
        .sum();

    Some(numerator as f64 / (total * (total - 1)) as f64)
}

/// Chi-squared statistic of `observed` against a reference distribution.
///
/// Expected counts are `reference[i] / reference_total * N`, where `N` is the
/// number of observed letters. Letters with an expected count of zero are
/// skipped.
pub fn chi_squared(observed: &LetterCounts, reference: &LetterCounts, reference_total: u64) -> f64 {
    if reference_total == 0 {
        return f64::INFINITY;
    }

    let observed_total = f64::from(total(observed));
    let mut chi_squared = 0.0;

    for (&observed, &reference) in observed.iter().zip(reference.iter()) {
        let expected = f64::from(reference) / reference_total as f64 * observed_total;
        if expected > 0.0 {
            chi_squared += (f64::from(observed) - expected).powi(2) / expected;
        }
    }

    chi_squared
}

/// Rotates an uppercase letter backward by `shift`, wrapping at `A`.
/// Non-letters are returned unchanged.
#[inline]
pub fn rotate_back(byte: u8, shift: u8) -> u8 {
    if byte.is_ascii_uppercase() {
        (byte - b'A' + ALPHABET_SIZE as u8 - shift % ALPHABET_SIZE as u8) % ALPHABET_SIZE as u8 + b'A'
    } else {
        byte
    }
}

/// Letter indices ordered by descending count; ties keep alphabetical order.
pub fn rank_letters(counts: &LetterCounts) -> [u8; ALPHABET_SIZE] {
    let mut ranked: [u8; ALPHABET_SIZE] = std::array::from_fn(|index| index as u8);
    // Stable sort, so equal counts stay alphabetical
    ranked.sort_by(|&a, &b| counts[b as usize].cmp(&counts[a as usize]));
    ranked
}
