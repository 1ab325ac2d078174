//! Combined statistical fingerprint of a byte sequence.

use serde::{Deserialize, Serialize};

use crate::ALPHABET_LEN;

use super::entropy::{shannon_entropy, ByteClass};
use super::frequency::{index_of_coincidence, letter_distribution};

/// Statistical fingerprint of one byte sequence.
///
/// Bundles the individual statistics from a single pass over the input into
/// one report that downstream tooling can inspect or serialise. The fields
/// are plain values; nothing references the input buffer after
/// [`analyze`](Self::analyze) returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextProfile {
    /// Case-folded letter counts, index 0 = A through 25 = Z.
    pub letter_counts: [usize; ALPHABET_LEN],
    /// Index of Coincidence over the alphabetic bytes.
    pub index_of_coincidence: f64,
    /// Shannon entropy over all byte values, in bits.
    pub entropy: f64,
    /// Coarse entropy-based verdict on what the input looks like.
    pub class: ByteClass,
}

impl TextProfile {
    /// Fingerprint `input`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cipherscope::{ByteClass, TextProfile};
    ///
    /// let profile = TextProfile::analyze(b"The quick brown fox jumps over the lazy dog");
    /// assert_eq!(profile.class, ByteClass::NaturalLanguage);
    /// assert_eq!(profile.letter_counts.iter().sum::<usize>(), 35);
    /// ```
    pub fn analyze(input: &[u8]) -> Self {
        let entropy = shannon_entropy(input);
        Self {
            letter_counts: letter_distribution(input),
            index_of_coincidence: index_of_coincidence(input),
            entropy,
            class: ByteClass::from_entropy(entropy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_empty() {
        let profile = TextProfile::analyze(b"");
        assert_eq!(profile.letter_counts, [0; ALPHABET_LEN]);
        assert_eq!(profile.index_of_coincidence, 0.0);
        assert_eq!(profile.entropy, 0.0);
        assert_eq!(profile.class, ByteClass::NearConstant);
    }

    #[test]
    fn test_profile_english_prose() {
        let profile = TextProfile::analyze(b"To be, or not to be, that is the question");
        assert_eq!(profile.class, ByteClass::NaturalLanguage);
        assert!(profile.index_of_coincidence > 0.05);
        assert_eq!(profile.letter_counts.iter().sum::<usize>(), 30);
    }

    #[test]
    fn test_profile_uniform_bytes() {
        let uniform: Vec<u8> = (0..=255).collect();
        let profile = TextProfile::analyze(&uniform);
        assert_eq!(profile.class, ByteClass::Random);
        // Each letter occurs once per case in 0..=255.
        assert_eq!(profile.letter_counts, [2; ALPHABET_LEN]);
    }
}
