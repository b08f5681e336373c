//! Vigenère cryptanalysis: Friedman key-length detection, then chi-squared
//! recovery of each key letter.

use std::fmt;
use std::ops::Range;

use log::{debug, info};

use crate::cipher::{CipherKey, Decrypt};
use crate::error::{CryptanalysisError, Result};
use crate::letter_stats::{
    ALPHABET_SIZE, LetterCounts, chi_squared, index_of_coincidence, letter_frequencies,
    rotate_back,
};
use crate::utils::validate_ciphertext;

/// Ciphertext transposed into one row per key position.
///
/// Row `i` holds every character whose position is `i` modulo the row count,
/// spaces included, so every row was enciphered under a single key letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherMatrix {
    rows: Vec<String>,
    len: usize,
}

impl CipherMatrix {
    /// Splits `text` into `rows` interleaved rows. `rows` must be non-zero.
    pub fn new(text: &str, rows: usize) -> Self {
        let mut matrix = vec![String::new(); rows];

        for (position, c) in text.chars().enumerate() {
            matrix[position % rows].push(c);
        }

        Self {
            rows: matrix,
            len: text.chars().count(),
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(String::as_str)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Reassembles the rows in interleaved order, giving back the split text.
    pub fn interleave(&self) -> String {
        let mut columns: Vec<std::str::Chars<'_>> = self.rows.iter().map(|row| row.chars()).collect();
        let row_count = columns.len();
        let mut text = String::with_capacity(self.len);

        for position in 0..self.len {
            if let Some(c) = columns[position % row_count].next() {
                text.push(c);
            }
        }

        text
    }

    /// Average index of coincidence over all rows.
    ///
    /// Rows with fewer than two letters contribute zero. Returns `None` when no
    /// row has enough letters to measure.
    pub fn average_coincidence(&self) -> Option<f64> {
        let mut total_ic = 0.0;
        let mut measured = 0;

        for row in &self.rows {
            if let Some(ic) = index_of_coincidence(&letter_frequencies(row)) {
                total_ic += ic;
                measured += 1;
            }
        }

        if measured == 0 {
            return None;
        }
        Some(total_ic / self.rows.len() as f64)
    }
}

impl fmt::Display for CipherMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Outcome of the Friedman key-length search
#[derive(Debug, Clone, PartialEq)]
pub struct KeyLengthEstimate {
    pub key_length: usize,
    /// Average coincidence for every measurable candidate length
    pub coincidences: Vec<(usize, f64)>,
}

/// Finds the most likely key length in `key_lengths` using Friedman's test.
///
/// The candidate with the strictly greatest average coincidence wins, so on a
/// tie the shorter length is kept. Lengths outside the window are never
/// considered.
pub fn detect_key_length(ciphertext: &str, key_lengths: Range<usize>) -> Result<KeyLengthEstimate> {
    let mut best_key_length: usize = 0;
    let mut best_average_ic: f64 = f64::NEG_INFINITY;
    let mut coincidences: Vec<(usize, f64)> = Vec::new();

    for key_length in key_lengths.filter(|&length| length > 0) {
        let matrix = CipherMatrix::new(ciphertext, key_length);
        debug!("Key length {key_length} matrix:\n{matrix}");

        // Skip if no row has enough letters
        let Some(average_ic) = matrix.average_coincidence() else {
            debug!("Key length {key_length}: no measurable rows");
            continue;
        };
        debug!("Key length {key_length}: average coincidence {average_ic:.5}");
        coincidences.push((key_length, average_ic));

        if average_ic > best_average_ic {
            best_average_ic = average_ic;
            best_key_length = key_length;
        }
    }

    if best_key_length == 0 {
        return Err(CryptanalysisError::KeyLengthNotFound);
    }

    Ok(KeyLengthEstimate {
        key_length: best_key_length,
        coincidences,
    })
}

/// Finds the key shift for one matrix row.
///
/// Every rotation `0..26` is undone on the row and compared against the
/// reference distribution; the rotation with the smallest chi-squared
/// statistic wins.
///
/// # Returns
///
/// The winning shift together with its chi-squared statistic.
pub fn column_shift(row: &str, reference: &LetterCounts, reference_total: u64) -> (u8, f64) {
    let mut best_shift: u8 = 0;
    let mut best_chi_squared = f64::INFINITY;

    for shift in 0..ALPHABET_SIZE as u8 {
        let rotated: String = row.bytes().map(|byte| rotate_back(byte, shift) as char).collect();
        let statistic = chi_squared(&letter_frequencies(&rotated), reference, reference_total);

        if statistic < best_chi_squared {
            best_chi_squared = statistic;
            best_shift = shift;
        }
    }

    (best_shift, best_chi_squared)
}

/// Reconstructs the complete Vigenère key for a known key length.
pub fn recover_key(
    ciphertext: &str,
    key_length: usize,
    reference: &LetterCounts,
    reference_total: u64,
) -> Result<String> {
    if key_length == 0 {
        return Err(CryptanalysisError::KeyLengthNotFound);
    }
    if reference_total == 0 {
        return Err(CryptanalysisError::EmptyDictionary);
    }

    let matrix = CipherMatrix::new(ciphertext, key_length);
    let mut key = String::with_capacity(key_length);

    for (column, row) in matrix.rows().iter().enumerate() {
        let (shift, statistic) = column_shift(row, reference, reference_total);
        debug!("Column {column}: shift {shift} (chi-squared {statistic:.3})");
        key.push((b'A' + shift) as char);
    }

    Ok(key)
}

/// Result of a Vigenère analysis
#[derive(Debug, Clone, PartialEq)]
pub struct VigenereRecovery {
    pub key: String,
    pub plaintext: String,
    pub key_length: usize,
    pub coincidences: Vec<(usize, f64)>,
}

/// Recovers key and plaintext from Vigenère ciphertext.
pub fn analyze<C: Decrypt + ?Sized>(
    ciphertext: &str,
    reference: &LetterCounts,
    reference_total: u64,
    cipher: &C,
    key_lengths: Range<usize>,
) -> Result<VigenereRecovery> {
    validate_ciphertext(ciphertext)?;

    // Step 1: Find key length using Index of Coincidence
    let estimate = detect_key_length(ciphertext, key_lengths)?;
    info!("Vigenere key length: {}", estimate.key_length);

    // Step 2: Reconstruct the key using frequency analysis
    let key = recover_key(ciphertext, estimate.key_length, reference, reference_total)?;
    info!("Vigenere key: {key}");

    // Step 3: Decrypt
    let plaintext = cipher.decrypt(&CipherKey::Vigenere(key.clone()), ciphertext)?;

    Ok(VigenereRecovery {
        key,
        plaintext,
        key_length: estimate.key_length,
        coincidences: estimate.coincidences,
    })
}
