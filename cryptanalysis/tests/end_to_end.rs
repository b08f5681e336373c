mod common;

use common::{
    PASSAGE, english_dictionary, rot_encrypt, substitution_encrypt, unique_words,
    vigenere_encrypt,
};
use cryptanalysis::analyzers::check_best_key;
use cryptanalysis::analyzers::substitution::initial_key;
use cryptanalysis::{
    AnalyzerConfig, CipherKey, CipherKind, CryptanalysisError, Cryptanalyst, SubstitutionKey,
    WordList, letter_frequencies,
};

fn analyst(config: AnalyzerConfig) -> Cryptanalyst<WordList> {
    Cryptanalyst::new(english_dictionary(), config).unwrap()
}

#[test]
fn test_rot13_quick_brown_fox() {
    let ciphertext = rot_encrypt("THE QUICK BROWN FOX", 13);
    let recovery = analyst(AnalyzerConfig::default()).rotx(&ciphertext).unwrap();

    assert_eq!(recovery.shift, 13);
    assert_eq!(recovery.plaintext, "THE QUICK BROWN FOX");
}

#[test]
fn test_rotx_recovers_every_shift() {
    let analyst = analyst(AnalyzerConfig::default());
    let plaintext = "WE HAD EVERYTHING BEFORE US";

    for shift in 1..26 {
        let recovery = analyst.rotx(&rot_encrypt(plaintext, shift)).unwrap();
        assert_eq!(recovery.shift, shift);
        assert_eq!(recovery.plaintext, plaintext);
    }
}

#[test]
fn test_vigenere_recovers_keys_in_window() {
    let analyst = analyst(AnalyzerConfig::default());

    for key in ["NEBULA", "SECRETS", "HARMONICA"] {
        let ciphertext = vigenere_encrypt(PASSAGE, key);
        let recovery = analyst.vigenere(&ciphertext).unwrap();

        assert_eq!(recovery.key_length, key.len());
        assert_eq!(recovery.key, key);
        assert_eq!(recovery.plaintext, PASSAGE);
    }
}

#[test]
fn test_vigenere_short_key_outside_window() {
    // LEMON has length 5; only lengths 6..12 are tried, so the period shows up
    // doubled instead
    let ciphertext = vigenere_encrypt(PASSAGE, "LEMON");
    let recovery = analyst(AnalyzerConfig::default()).vigenere(&ciphertext).unwrap();

    assert_ne!(recovery.key_length, 5);
    assert!((6..12).contains(&recovery.key_length));
    assert_eq!(recovery.key_length, 10);
    assert_eq!(recovery.key, "LEMONLEMON");
    assert!(recovery.coincidences.iter().all(|&(length, _)| length != 5));
}

#[test]
fn test_vigenere_widened_window_finds_short_key() {
    let config = AnalyzerConfig::default().with_key_lengths(5..6);
    let ciphertext = vigenere_encrypt(PASSAGE, "LEMON");
    let recovery = analyst(config).vigenere(&ciphertext).unwrap();

    assert_eq!(recovery.key, "LEMON");
    assert_eq!(recovery.plaintext, PASSAGE);
}

#[test]
fn test_vigenere_degenerate_ciphertext() {
    let result = analyst(AnalyzerConfig::default()).vigenere("AB");
    assert_eq!(result.unwrap_err(), CryptanalysisError::KeyLengthNotFound);
}

#[test]
fn test_substitution_recovers_key() {
    // Letter counts of this text rank the same way as the dictionary's, and
    // the true plaintext is a local optimum of the quadgram score
    let words = unique_words(PASSAGE);
    let plaintext = words.join(" ");
    let dictionary: WordList = words.into_iter().collect();
    let key: SubstitutionKey = "KHTDCGNEBJOPQXAMWLVSIZURYF".parse().unwrap();
    let ciphertext = substitution_encrypt(&plaintext, &key);

    let config = AnalyzerConfig::default().with_seed(642);
    let analyst = Cryptanalyst::new(dictionary, config).unwrap();
    let recovery = analyst.substitution(&ciphertext).unwrap();

    assert!(recovery.verified);
    assert!(recovery.key == key || check_best_key(&recovery.plaintext, analyst.dictionary()));
    assert_eq!(recovery.plaintext, plaintext);
    assert_eq!(recovery.rounds, 1);
}

#[test]
fn test_substitution_best_effort_is_reproducible() {
    let key: SubstitutionKey = "QWERTYUIOPASDFGHJKLZXCVBNM".parse().unwrap();
    let ciphertext = substitution_encrypt(PASSAGE, &key);
    let config = AnalyzerConfig::default()
        .with_seed(7)
        .with_rounds(2)
        .with_moves_per_round(400);
    let analyst = analyst(config);

    let first = analyst.substitution(&ciphertext).unwrap();
    let second = analyst.substitution(&ciphertext).unwrap();
    assert_eq!(first, second);

    let (reference, _) = analyst.reference_letters();
    let initial = initial_key(&letter_frequencies(&ciphertext), reference);
    assert!(first.score >= analyst.corpus().score(&initial.apply(&ciphertext)));
    assert_eq!(first.plaintext, first.key.apply(&ciphertext));
    assert_eq!(first.verified, check_best_key(&first.plaintext, analyst.dictionary()));
    // Still a permutation
    assert!(first.key.to_string().parse::<SubstitutionKey>().is_ok());
}

#[test]
fn test_empty_ciphertext_fails_everywhere() {
    let analyst = analyst(AnalyzerConfig::default().with_seed(1));
    for kind in [CipherKind::RotX, CipherKind::Vigenere, CipherKind::Substitution] {
        assert_eq!(analyst.analyze(kind, ""), Err(CryptanalysisError::EmptyCiphertext));
    }
}

#[test]
fn test_invalid_characters_rejected() {
    let analyst = analyst(AnalyzerConfig::default());
    let result = analyst.analyze(CipherKind::RotX, "GUR, SBK");
    assert_eq!(
        result,
        Err(CryptanalysisError::InvalidCharacter { character: ',', position: 3 })
    );
}

#[test]
fn test_analyze_returns_cipher_keys() {
    let analyst = analyst(AnalyzerConfig::default());
    let ciphertext = vigenere_encrypt(PASSAGE, "SECRETS");
    let recovery = analyst.analyze(CipherKind::Vigenere, &ciphertext).unwrap();
    assert_eq!(recovery.key, CipherKey::Vigenere("SECRETS".to_string()));
    assert_eq!(recovery.key.kind(), CipherKind::Vigenere);
}
