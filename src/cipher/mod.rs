//! Substitution-cipher transforms.
//!
//! This module covers the classical monoalphabetic toolbox:
//! - Keyed Caesar rotation, single-key and repeating-key
//! - The full 26-way shift enumeration for brute-force inspection
//! - The A1Z26 numeric letter encoding: encode, decode, and an
//!   ambiguity-resolving parser for mixed text

pub mod a1z26;
pub mod caesar;

// Re-export commonly used items
pub use a1z26::{a1z26_decode, a1z26_encode, a1z26_parse};
pub use caesar::{caesar_shift, caesar_shift_keyed, caesar_shifts};
