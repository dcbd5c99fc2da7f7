//! Lexical plausibility scoring.
//!
//! A candidate decryption that is actual Portuguese will contain
//! common short words and regular spacing, and will not contain raw
//! control bytes. This module turns those three signals into a single
//! score; higher means more plausible.

/// Common short Portuguese words, padded with spaces so they only
/// match as whole words against the padded candidate text. All tokens
/// are plain ASCII; accented words only appear in their stripped
/// forms (" est ", " voc ").
pub const COMMON_WORDS: [&str; 31] = [
    " que ", " de ", " da ", " do ", " das ", " dos ",
    " nao ", " no ", " uma ", " para ", " por ", " com ",
    " mais ", " como ", " esta ", " est ", " voce ", " voc ",
    " isso ", " tudo ", " ser ", " tem ", " foi ", " mas ",
    " em ", " se ", " eu ", " ele ", " ela ", " eles ", " elas ",
];

/// Score added per common-word occurrence.
const WORD_WEIGHT: f64 = 5.0;
/// Score added per space byte in the original text.
const SPACE_WEIGHT: f64 = 0.1;
/// Penalty per low control byte in the original text.
const CONTROL_PENALTY: f64 = 10.0;

/// Counts occurrences of `needle` in `haystack`, overlapping matches
/// included: the scan resumes one byte past each match start, not past
/// its end. Changing this to non-overlapping counting silently alters
/// crack accuracy.
fn count_occurrences(haystack: &[u8], needle: &[u8]) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.windows(needle.len()).filter(|w| *w == needle).count()
}

/// A byte that should never appear in printable Portuguese text.
/// Tab (0x09) through CR (0x0D) are allowed whitespace.
fn is_suspicious(byte: u8) -> bool {
    byte < 0x09 || (0x0E..0x20).contains(&byte)
}

/// Scores the lexical plausibility of a candidate text.
///
/// ASCII letters are folded to lowercase for word matching only;
/// non-ASCII bytes are left as-is and simply will not match the
/// ASCII-folded word-list entries. The space and control-byte signals
/// are taken from the original, unfolded input.
///
/// # Arguments
///
/// * `input` - The candidate bytes to score.
///
/// # Returns
///
/// The net score. Never fails; empty or letterless input just scores
/// low.
pub fn score(input: &[u8]) -> f64 {
    let folded: Vec<u8> = input.to_ascii_lowercase();

    // Pad with one delimiter on each end so words at the very start
    // or end of the text still match.
    let mut padded: Vec<u8> = Vec::with_capacity(folded.len() + 2);
    padded.push(b' ');
    padded.extend_from_slice(&folded);
    padded.push(b' ');

    let mut score = 0.0;

    for word in COMMON_WORDS {
        let hits = count_occurrences(&padded, word.as_bytes());
        score += WORD_WEIGHT * hits as f64;
    }

    let spaces = input.iter().filter(|&&b| b == b' ').count();
    score += spaces as f64 * SPACE_WEIGHT;

    let suspicious = input.iter().filter(|&&b| is_suspicious(b)).count();
    score -= suspicious as f64 * CONTROL_PENALTY;

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_word_hit() {
        // "tudo" and "que" once each (+10.0) plus two spaces (+0.2).
        let s = score(b"tudo que quero");
        assert!((s - 10.2).abs() < 1e-9, "score was {}", s);
    }

    #[test]
    fn test_word_at_text_boundary_matches() {
        // Padding makes " de " match even with no surrounding spaces
        // in the input itself.
        assert!((score(b"de") - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_case_folded_matching() {
        assert_eq!(score(b"QUE tal"), score(b"que tal"));
    }

    #[test]
    fn test_overlapping_matches_counted() {
        // Padded text is " a a a ": " a " occurs at offsets 0, 2 and 4.
        // A scan resuming past the match end would only find two.
        let hits = count_occurrences(b" a a a ", b" a ");
        assert_eq!(hits, 3);
    }

    #[test]
    fn test_space_weight() {
        // No word-list hits, three spaces.
        let s = score(b"xxx yyy zzz qqq");
        assert!((s - 0.3).abs() < 1e-9, "score was {}", s);
    }

    #[test]
    fn test_control_byte_penalty() {
        // 0x01 and 0x0E are penalized; \t and \n are ordinary whitespace.
        let s = score(b"ab\x01cd\x0eef");
        assert!((s - -20.0).abs() < 1e-9, "score was {}", s);
        assert_eq!(score(b"ab\tcd\nef"), 0.0);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(score(b""), 0.0);
    }

    #[test]
    fn test_non_ascii_words_do_not_match() {
        // The token list is ASCII-only and the fold leaves non-ASCII
        // bytes alone, so accented words never hit; only the three
        // spaces count.
        let s = score("onde você está agora".as_bytes());
        assert!((s - 0.3).abs() < 1e-9, "score was {}", s);
    }
}
