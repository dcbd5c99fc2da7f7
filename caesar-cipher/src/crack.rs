//! Brute-force key recovery for Caesar-enciphered Portuguese text.
//!
//! All 26 possible shifts are tried; each candidate decryption is
//! scored by combining the chi-square frequency statistic with the
//! lexical plausibility score, and the best-scoring shift wins. The
//! whole path is deterministic: identical input bytes always produce
//! identical results.

use crate::{cipher, frequency, lexical};

/// Weight applied to the chi-square statistic when combined with the
/// lexical score. These heuristic constants are tuned for the
/// Portuguese reference corpus; recalibrate only against a different
/// corpus.
const CHI_SQUARE_WEIGHT: f64 = 0.5;

/// The outcome of a crack run. Higher `best_score` means more
/// Portuguese-looking.
#[derive(Debug, Clone, PartialEq)]
pub struct CrackResult {
    /// The recovered shift, in [0, 25].
    pub best_shift: i32,
    /// The combined score of the winning candidate.
    pub best_score: f64,
    /// The candidate decryption under `best_shift`.
    pub best_plaintext: Vec<u8>,
}

/// Combined score for one candidate decryption: low chi-square is
/// good, so it enters negatively.
pub fn score_candidate(input: &[u8]) -> f64 {
    -CHI_SQUARE_WEIGHT * frequency::chi_square(input) + lexical::score(input)
}

/// Recovers the most likely shift for a Portuguese ciphertext.
///
/// Tries every shift in [0, 25] and keeps the candidate with the
/// strictly greatest combined score. Ties therefore resolve to the
/// smallest shift, and degenerate input (even empty) still yields a
/// complete result with shift 0.
///
/// # Arguments
///
/// * `ciphertext` - The enciphered bytes.
///
/// # Returns
///
/// The best shift, its score and the corresponding decryption.
pub fn crack(ciphertext: &[u8]) -> CrackResult {
    let mut best = CrackResult {
        best_shift: 0,
        best_score: f64::NEG_INFINITY,
        best_plaintext: Vec::new(),
    };

    for shift in 0..26 {
        let candidate = cipher::apply_inverse(ciphertext, shift);
        let score = score_candidate(&candidate);

        // Strictly greater only, so an earlier shift is never
        // displaced by an equal later one.
        if score > best.best_score {
            best = CrackResult {
                best_shift: shift,
                best_score: score,
                best_plaintext: candidate,
            };
        }
    }

    best
}
