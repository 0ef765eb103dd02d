//! Core trait definitions for anagram checking
//!
//! The encoding seam turns words into signatures; the check seam compares
//! two words. [`AnagramChecker`](crate::core::checker::AnagramChecker)
//! implements both.

use tracing::debug;

use crate::core::data::{AnagramVerdict, PrimeSignature, Word};
use crate::utils::error::AppResult;

/// Encoding of words as prime signatures
pub trait PrimeEncoding {
    /// Prime signature of `word`, tagging any failure with `which`
    fn encode(&self, word: &str, which: Word) -> AppResult<PrimeSignature>;

    /// Signature of a standalone word
    fn signature(&self, word: &str) -> AppResult<PrimeSignature> {
        self.encode(word, Word::First)
    }

    /// Check that every character of `word` is encodable
    fn validate(&self, word: &str) -> AppResult<()>;
}

/// Anagram comparison between two words
pub trait AnagramCheck: PrimeEncoding {
    /// `true` iff both words hold the same letters with the same counts
    fn is_anagram(&self, word1: &str, word2: &str) -> AppResult<bool> {
        let first = self.encode(word1, Word::First)?;
        let second = self.encode(word2, Word::Second)?;
        let anagram = first == second;
        debug!(word1, word2, anagram, "Compared signatures");
        Ok(anagram)
    }

    /// Same check, wrapped in a serializable record
    fn verdict(&self, word1: &str, word2: &str) -> AppResult<AnagramVerdict> {
        let anagram = self.is_anagram(word1, word2)?;
        Ok(AnagramVerdict::new(word1, word2, anagram))
    }
}
