//! Letter-frequency analysis against a Portuguese reference distribution.

/// Approximate Portuguese letter frequencies (A-Z) in percent.
///
/// Values sum to roughly 100. K, W and Y are essentially absent from
/// native Portuguese vocabulary and carry an expected frequency of
/// exactly zero.
pub const PT_LETTER_FREQ: [f64; 26] = [
    14.6, 1.0, 3.9, 4.9, 12.6, 1.0, 1.3, 1.0, 6.2, 0.4, 0.0, 2.8, 4.7,
    5.0, 10.7, 2.5, 1.3, 6.5, 7.9, 4.3, 4.6, 1.7, 0.0, 0.3, 0.0, 0.4,
];

/// Sentinel returned by [`chi_square`] when the input carries no
/// alphabetic signal at all. Large enough to lose against any real
/// candidate.
pub const NO_SIGNAL: f64 = 1e9;

/// Counts the frequency of each letter in the given bytes.
///
/// Upper and lower case fold into the same bucket. Non-letter bytes
/// contribute to neither the counts nor the total.
///
/// # Arguments
///
/// * `input` - The bytes to analyze.
///
/// # Returns
///
/// An array of 26 counts for A-Z plus the total letter count.
pub fn count_letters(input: &[u8]) -> ([u32; 26], u32) {
    let mut counts: [u32; 26] = [0; 26];
    let mut total: u32 = 0;

    for &byte in input {
        if byte.is_ascii_alphabetic() {
            let index: usize = (byte.to_ascii_lowercase() - b'a') as usize;
            counts[index] += 1;
            total += 1;
        }
    }

    (counts, total)
}

/// Computes the chi-square statistic of the input against the
/// Portuguese reference distribution. Lower means closer to
/// Portuguese.
///
/// Letters with a zero reference frequency are excluded from the sum,
/// so their observed counts do not enter the statistic. An input with
/// no alphabetic bytes yields [`NO_SIGNAL`] instead of an error.
pub fn chi_square(input: &[u8]) -> f64 {
    let (counts, total) = count_letters(input);
    if total < 1 {
        return NO_SIGNAL;
    }

    let mut chi2 = 0.0;
    for i in 0..26 {
        let expected = PT_LETTER_FREQ[i] * f64::from(total) / 100.0;
        if expected <= 0.0 {
            continue;
        }
        let diff = f64::from(counts[i]) - expected;
        chi2 += diff * diff / expected;
    }
    chi2
}
