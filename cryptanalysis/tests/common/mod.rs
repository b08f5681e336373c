//! Shared fixtures and test-only encryption helpers

use cryptanalysis::{SubstitutionKey, WordList};

pub const PASSAGE: &str = "IT WAS THE BEST OF TIMES IT WAS THE WORST OF TIMES IT WAS THE AGE OF WISDOM \
IT WAS THE AGE OF FOOLISHNESS IT WAS THE EPOCH OF BELIEF IT WAS THE EPOCH OF INCREDULITY \
IT WAS THE SEASON OF LIGHT IT WAS THE SEASON OF DARKNESS IT WAS THE SPRING OF HOPE \
IT WAS THE WINTER OF DESPAIR WE HAD EVERYTHING BEFORE US WE HAD NOTHING BEFORE US \
WE WERE ALL GOING DIRECT TO HEAVEN WE WERE ALL GOING DIRECT THE OTHER WAY \
IN SHORT THE PERIOD WAS SO FAR LIKE THE PRESENT PERIOD THAT SOME OF ITS NOISIEST \
AUTHORITIES INSISTED ON ITS BEING RECEIVED FOR GOOD OR FOR EVIL IN THE SUPERLATIVE \
DEGREE OF COMPARISON ONLY";

const EXTRA_WORDS: [&str; 9] = ["THE", "QUICK", "BROWN", "FOX", "JUMPS", "OVER", "LAZY", "DOG", "FOR"];

/// Words of `text` in order of first appearance
pub fn unique_words(text: &str) -> Vec<&str> {
    let mut words: Vec<&str> = Vec::new();
    for word in text.split(' ') {
        if !words.contains(&word) {
            words.push(word);
        }
    }
    words
}

/// Every distinct word of the passage plus a pangram's words
pub fn english_dictionary() -> WordList {
    let mut words = unique_words(PASSAGE);
    for word in EXTRA_WORDS {
        if !words.contains(&word) {
            words.push(word);
        }
    }
    words.into_iter().collect()
}

pub fn rot_encrypt(plaintext: &str, shift: u8) -> String {
    plaintext
        .bytes()
        .map(|byte| {
            if byte.is_ascii_uppercase() {
                ((byte - b'A' + shift) % 26 + b'A') as char
            } else {
                byte as char
            }
        })
        .collect()
}

/// Vigenère encryption where every position, spaces included, advances the key.
pub fn vigenere_encrypt(plaintext: &str, key: &str) -> String {
    let key_bytes = key.as_bytes();
    plaintext
        .bytes()
        .enumerate()
        .map(|(position, byte)| {
            if byte.is_ascii_uppercase() {
                let shift = key_bytes[position % key_bytes.len()] - b'A';
                ((byte - b'A' + shift) % 26 + b'A') as char
            } else {
                byte as char
            }
        })
        .collect()
}

/// Encrypts with the inverse of a cipher-to-plain key.
pub fn substitution_encrypt(plaintext: &str, key: &SubstitutionKey) -> String {
    key.inverse().apply(plaintext)
}
