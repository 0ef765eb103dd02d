//! Primegram - anagram detection by prime-product signatures
//!
//! Every lowercase Latin letter maps to its own prime. A word's signature
//! is the product of its letters' primes, and by unique factorization two
//! words share a signature exactly when they are anagrams. Products are
//! arbitrary precision, so word length is unbounded.
//!
//! ```
//! use primegram::{AnagramCheck, AnagramChecker};
//!
//! let checker = AnagramChecker::new();
//! assert!(checker.is_anagram("listen", "silent").unwrap());
//! assert!(checker.is_anagram("Listen", "silent").is_err());
//! ```

pub mod config;
pub mod core;
pub mod demo;
pub mod utils;

// Re-export core types and traits for easier use
pub use core::{
    checker::AnagramChecker,
    data::{AnagramVerdict, PrimeSignature, Word},
    table::{LETTER_PRIMES, LetterPrimeTable},
    traits::{AnagramCheck, PrimeEncoding},
};
pub use utils::error::{AppError, AppResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
