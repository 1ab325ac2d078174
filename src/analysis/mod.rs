//! Statistical text-analysis primitives.
//!
//! This module fingerprints byte sequences:
//! - Letter-frequency distribution over the 26-letter Latin alphabet
//! - Index of Coincidence (natural language vs. polyalphabetic ciphertext)
//! - Shannon entropy over the full byte-value space, with published
//!   interpretation thresholds
//! - A combined [`TextProfile`] report with a coarse [`ByteClass`] verdict

pub mod entropy;
pub mod frequency;
pub mod profile;

// Re-export commonly used items
pub use entropy::{
    shannon_entropy, ByteClass, ENTROPY_COMPRESSED, ENTROPY_ENGLISH_END, ENTROPY_ENGLISH_START,
    ENTROPY_LOW,
};
pub use frequency::{index_of_coincidence, letter_distribution, IOC_ENGLISH};
pub use profile::TextProfile;
