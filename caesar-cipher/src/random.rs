//! Blind-test encryption under a randomly drawn key.
//!
//! The drawn shift is used once and discarded. It is never stored,
//! logged or returned; the ciphertext is the only observable output.
//! This path is the only nondeterministic operation in the crate and
//! is kept apart from the crack path, which never consults a random
//! source.

use rand::Rng;

use crate::cipher;

/// Encrypts the input under one uniformly random shift in [0, 25]
/// drawn from the given source.
///
/// Taking the generator as a parameter keeps the draw testable with a
/// seeded [`rand::rngs::StdRng`].
pub fn apply_random<R: Rng>(input: &[u8], rng: &mut R) -> Vec<u8> {
    let shift: i32 = rng.gen_range(0..26);
    cipher::apply(input, shift)
}

/// Encrypts the input under a random shift from the operating system
/// entropy source.
pub fn apply_random_os(input: &[u8]) -> Vec<u8> {
    apply_random(input, &mut rand::thread_rng())
}
