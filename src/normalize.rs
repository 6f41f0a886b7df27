//! Text canonicalisation ahead of profiling and trigram extraction.
//!
//! Downstream stages must never see punctuation, digits, or irregular
//! whitespace — those would pollute block tallies and trigram counts.

use unicode_normalization::UnicodeNormalization;

/// Canonicalise `text` for detection.
///
/// Steps, in order:
/// 1. Unicode canonical composition (NFC), so combining sequences and
///    precomposed characters are treated uniformly.
/// 2. Every non-alphabetic character becomes a single space.
/// 3. Every run of whitespace collapses to a single space.
///
/// Idempotent; empty input yields empty output. Leading/trailing separators
/// survive as a single space — callers count characters, they do not trim.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_space = false;

    for c in text.nfc() {
        if c.is_alphabetic() {
            out.push(c);
            prev_space = false;
        } else if !prev_space {
            out.push(' ');
            prev_space = true;
        }
    }

    out
}
