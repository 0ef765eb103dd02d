//! Demonstration run over a fixed set of word pairs

use std::io::Write;

use crate::core::{checker::AnagramChecker, traits::AnagramCheck};
use crate::utils::error::{AppResult, report_error};

/// Pairs checked by the demo, in print order
pub const DEMO_PAIRS: [(&str, &str); 4] = [
    ("listen", "silent"),
    ("hello", "world"),
    ("evil", "vile"),
    ("fluster", "restful"),
];

/// Write one `true`/`false` line per demo pair
pub fn run<W: Write>(checker: &AnagramChecker, out: &mut W) -> AppResult<()> {
    for (word1, word2) in DEMO_PAIRS {
        let anagram = checker.is_anagram(word1, word2)?;
        writeln!(out, "{}", anagram)?;
    }
    out.flush()?;
    Ok(())
}

/// Run the demo, reporting any failure once on stderr.
///
/// Returns `false` when the run failed.
pub fn run_reported<W: Write>(checker: &AnagramChecker, out: &mut W) -> bool {
    match run(checker, out) {
        Ok(()) => true,
        Err(err) => {
            report_error(&err);
            false
        }
    }
}
