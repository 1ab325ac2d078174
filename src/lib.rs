//! Cipherscope: statistical fingerprinting and classical-cipher transforms
//! for raw byte sequences.
//!
//! The crate has two independent halves:
//!
//! - [`analysis`]: letter-frequency distribution, Index of Coincidence, and
//!   Shannon entropy, used to tell natural-language text apart from
//!   random, compressed, or encrypted data.
//! - [`cipher`]: keyed Caesar rotation (single- and repeating-key), the full
//!   26-way shift enumeration, and the A1Z26 numeric letter encoding with an
//!   ambiguity-resolving parser.
//!
//! Every function is a pure, single-pass operation over a borrowed byte
//! slice. Edge inputs produce defined default outputs instead of errors:
//! empty input yields empty or zero-valued results, out-of-range A1Z26
//! symbols are dropped, and rotation amounts are reduced modulo 26 however
//! they are supplied. Validation, where wanted, belongs to the caller.
//!
//! # Example
//!
//! ```
//! use cipherscope::prelude::*;
//!
//! let ciphertext = caesar_shift(b"Attack at dawn", 3);
//! assert_eq!(ciphertext, b"Dwwdfn dw gdzq");
//!
//! let profile = TextProfile::analyze(b"The quick brown fox jumps over the lazy dog");
//! assert_eq!(profile.class, ByteClass::NaturalLanguage);
//! ```

pub mod analysis;
pub mod cipher;
pub mod prelude;

/// Number of letters in the Latin alphabet handled by every operation.
pub const ALPHABET_LEN: usize = 26;

// Re-export the core report types for convenient external access.
//
// These form the small, stable surface most consumers reach for first;
// the full function set lives in the component modules and the prelude.
pub use analysis::{ByteClass, TextProfile};
