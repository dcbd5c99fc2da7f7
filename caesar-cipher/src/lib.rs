//! # Caesar Cipher Library
//!
//! Caesar shift cipher over the ASCII Latin alphabet together with an
//! automated cracker for Portuguese text.
//!
//! ## Components
//!
//! - **cipher** - the shift transform itself (encrypt/decrypt)
//! - **frequency** - chi-square comparison against Portuguese letter frequencies
//! - **lexical** - plausibility score from common Portuguese words
//! - **crack** - brute-force key search combining both scores
//! - **random** - blind-test encryption under a never-revealed key
//!
//! ## Usage
//!
//! ```rust
//! use caesar_cipher::{apply, crack};
//!
//! let plaintext: &[u8] = b"O importante nao e vencer todos os dias, mas \
//!     lutar sempre. Tudo isso que temos de aprender com o tempo, porque \
//!     ele nao espera por ninguem.";
//!
//! let ciphertext = apply(plaintext, 7);
//! let result = crack(&ciphertext);
//!
//! assert_eq!(result.best_shift, 7);
//! assert_eq!(result.best_plaintext, plaintext);
//! ```
//!
//! Only ASCII letters A-Z/a-z are shifted. Accents and any other
//! UTF-8 bytes pass through every operation unchanged, which keeps all
//! transforms total and exactly length-preserving on raw bytes.
//!
//! This is a toy cipher, broken by design. The `random` module exists
//! to produce blind test inputs for the cracker, not to provide any
//! form of confidentiality.

// Public modules
pub mod cipher;
pub mod crack;
pub mod frequency;
pub mod lexical;
pub mod random;

// Re-exports for easy access
pub use cipher::{apply, apply_inverse, normalize_shift};
pub use crack::{crack, score_candidate, CrackResult};
pub use frequency::chi_square;
pub use lexical::score;
pub use random::{apply_random, apply_random_os};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
