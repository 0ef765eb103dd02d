//! Prime-product anagram checker

use tracing::{debug, warn};

use crate::core::{
    data::{PrimeSignature, Word},
    table::LetterPrimeTable,
    traits::{AnagramCheck, PrimeEncoding},
};
use crate::utils::error::{AppError, AppResult};

/// Decides anagram equivalence of lowercase Latin words.
///
/// Only `'a'..='z'` is accepted. Uppercase letters, digits, whitespace,
/// punctuation and non-ASCII characters are rejected with
/// [`AppError::UnsupportedCharacter`]; callers wanting case-insensitive
/// comparison must lowercase their input first.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnagramChecker {
    table: LetterPrimeTable,
}

impl AnagramChecker {
    pub fn new() -> Self {
        Self {
            table: LetterPrimeTable,
        }
    }

    pub fn table(&self) -> &LetterPrimeTable {
        &self.table
    }

    fn unsupported(character: char, word: Word, index: usize) -> AppError {
        warn!(%character, %word, index, "Rejected character outside letter table");
        AppError::UnsupportedCharacter {
            character,
            word,
            index,
        }
    }
}

impl PrimeEncoding for AnagramChecker {
    fn encode(&self, word: &str, which: Word) -> AppResult<PrimeSignature> {
        let mut signature = PrimeSignature::empty();
        for (index, character) in word.chars().enumerate() {
            let prime = self
                .table
                .prime_for(character)
                .ok_or_else(|| Self::unsupported(character, which, index))?;
            signature.include(prime);
        }
        debug!(word, %signature, "Computed prime signature");
        Ok(signature)
    }

    fn validate(&self, word: &str) -> AppResult<()> {
        match word
            .chars()
            .enumerate()
            .find(|(_, c)| !self.table.contains(*c))
        {
            Some((index, character)) => Err(Self::unsupported(character, Word::First, index)),
            None => Ok(()),
        }
    }
}

impl AnagramCheck for AnagramChecker {}
