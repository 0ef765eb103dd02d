//! Core data structures for anagram queries
//!
//! A query is never stored: each input is reduced to a [`PrimeSignature`]
//! and the comparison result may be captured in an [`AnagramVerdict`].

use num_bigint::BigUint;
use num_traits::One;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which input of a query a character came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Word {
    First,
    Second,
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Word::First => write!(f, "first"),
            Word::Second => write!(f, "second"),
        }
    }
}

/// Product of the primes of every letter in a word.
///
/// Two words share a signature exactly when they hold the same letters
/// with the same counts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrimeSignature(BigUint);

impl PrimeSignature {
    /// Signature of the empty word
    pub fn empty() -> Self {
        Self(BigUint::one())
    }

    /// Multiply one more letter's prime into the signature
    pub fn include(&mut self, prime: u32) {
        self.0 *= prime;
    }

    pub fn value(&self) -> &BigUint {
        &self.0
    }
}

impl Default for PrimeSignature {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for PrimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of comparing two words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnagramVerdict {
    pub word1: String,
    pub word2: String,
    pub anagram: bool,
}

impl AnagramVerdict {
    pub fn new(word1: &str, word2: &str, anagram: bool) -> Self {
        Self {
            word1: word1.to_string(),
            word2: word2.to_string(),
            anagram,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_starts_at_one() {
        let sig = PrimeSignature::default();
        assert_eq!(sig.value(), &BigUint::one());
        assert_eq!(sig.to_string(), "1");
    }

    #[test]
    fn test_signature_include() {
        let mut sig = PrimeSignature::empty();
        sig.include(2);
        sig.include(101);
        sig.include(2);
        assert_eq!(sig.to_string(), "404");
    }

    #[test]
    fn test_verdict_serializes_to_json() {
        let verdict = AnagramVerdict::new("evil", "vile", true);
        let json = serde_json::to_string(&verdict).unwrap();
        assert_eq!(json, r#"{"word1":"evil","word2":"vile","anagram":true}"#);

        let back: AnagramVerdict = serde_json::from_str(&json).unwrap();
        assert_eq!(back, verdict);
    }

    #[test]
    fn test_word_display() {
        assert_eq!(Word::First.to_string(), "first");
        assert_eq!(serde_json::to_string(&Word::Second).unwrap(), r#""second""#);
    }
}
