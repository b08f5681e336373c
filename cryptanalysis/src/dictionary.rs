//! Reference word list consumed by the analyzers

use std::io::BufRead;

/// Enumerable, stable-ordered access to a reference word list.
pub trait Dictionary {
    /// Number of words in the dictionary
    fn len(&self) -> usize;

    /// Word at `index`, or `None` past the end
    fn word(&self, index: usize) -> Option<&str>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the words in index order
    fn words(&self) -> impl Iterator<Item = &str> {
        (0..self.len()).filter_map(move |index| self.word(index))
    }
}

/// In-memory word list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Reads one word per line; lines are trimmed and uppercased, blank lines skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.push(word.to_ascii_uppercase());
            }
        }
        Ok(Self { words })
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Dictionary for WordList {
    fn len(&self) -> usize {
        self.words.len()
    }

    fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }
}
