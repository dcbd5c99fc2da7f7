//! The Caesar shift transform over ASCII A-Z / a-z.
//!
//! Every byte outside the two Latin letter ranges (including UTF-8
//! continuation bytes for accented characters) is copied through
//! unchanged, so the transform is total and length-preserving.

/// Normalizes an arbitrary integer shift into the ring [0, 25].
///
/// # Arguments
///
/// * `shift` - Any integer shift, positive or negative.
///
/// # Returns
///
/// The equivalent rotation amount in [0, 25].
pub fn normalize_shift(shift: i32) -> u8 {
    shift.rem_euclid(26) as u8
}

/// Rotates a single byte within its case-specific 26-letter ring.
/// Non-letter bytes are returned as-is.
fn shift_byte(byte: u8, shift: u8) -> u8 {
    if byte.is_ascii_uppercase() {
        (byte - b'A' + shift) % 26 + b'A'
    } else if byte.is_ascii_lowercase() {
        (byte - b'a' + shift) % 26 + b'a'
    } else {
        byte
    }
}

/// Applies a Caesar shift to the given bytes.
///
/// The shift may be any integer; it is normalized internally, so
/// decryption is simply `apply(bytes, -shift)`.
///
/// # Arguments
///
/// * `input` - The bytes to transform.
/// * `shift` - The rotation amount.
///
/// # Returns
///
/// The transformed bytes, same length as the input.
pub fn apply(input: &[u8], shift: i32) -> Vec<u8> {
    let shift: u8 = normalize_shift(shift);
    input.iter().map(|&b| shift_byte(b, shift)).collect()
}

/// Applies the inverse shift, undoing `apply` with the same shift.
///
/// Normalizes before negating: `-shift` on the raw value would
/// overflow for `i32::MIN`, while the normalized shift is always
/// safely negatable.
pub fn apply_inverse(input: &[u8], shift: i32) -> Vec<u8> {
    apply(input, -i32::from(normalize_shift(shift)))
}
