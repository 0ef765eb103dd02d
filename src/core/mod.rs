//! Core anagram logic
//!
//! The letter table, the signature and verdict types, the traits at the
//! encoding seam, and the checker that ties them together.

pub mod checker;
pub mod data;
pub mod table;
pub mod traits;
