//! Letter-Prime Table
//!
//! Maps each lowercase Latin letter to a distinct prime. Distinctness is
//! what makes products of these primes identify a multiset of letters.

/// Primes assigned to `a` through `z`, in alphabetical order
pub const LETTER_PRIMES: [u32; 26] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101,
];

/// Read-only view over [`LETTER_PRIMES`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterPrimeTable;

impl LetterPrimeTable {
    /// Prime for `letter`, or `None` outside `'a'..='z'`
    pub fn prime_for(&self, letter: char) -> Option<u32> {
        if letter.is_ascii_lowercase() {
            Some(LETTER_PRIMES[(letter as u8 - b'a') as usize])
        } else {
            None
        }
    }

    pub fn contains(&self, letter: char) -> bool {
        letter.is_ascii_lowercase()
    }

    /// All `(letter, prime)` pairs in alphabetical order
    pub fn letters(&self) -> impl Iterator<Item = (char, u32)> {
        (b'a'..=b'z').map(char::from).zip(LETTER_PRIMES)
    }
}
