//! Shannon entropy over raw byte values.
//!
//! Unlike the letter statistics in [`frequency`](super::frequency), entropy
//! is computed over the full 0–255 byte space, so it applies to arbitrary
//! binary data. The exported thresholds give the conventional reading of the
//! result: near-constant data sits close to zero, English text lands between
//! 3.5 and 5 bits, and compressed or encrypted data crowds the top of the
//! 8-bit range.

use serde::{Deserialize, Serialize};

/// Threshold below which the entropy implies very little variation in the
/// input.
pub const ENTROPY_LOW: f64 = 0.5;

/// Lower bound for the Shannon entropy of typical English text.
pub const ENTROPY_ENGLISH_START: f64 = 3.5;

/// Upper bound for the Shannon entropy of typical English text.
pub const ENTROPY_ENGLISH_END: f64 = 5.0;

/// Threshold above which the entropy implies the data is
/// random, encrypted, or compressed.
pub const ENTROPY_COMPRESSED: f64 = 7.5;

/// Calculate the Shannon entropy of `input`, in bits per byte.
///
/// The entropy measures how much information the observed byte distribution
/// carries: 0 for a constant input, up to 8 for a perfectly uniform spread
/// over all 256 byte values. Empty input yields 0, since no terms
/// accumulate.
///
/// # Examples
///
/// ```
/// use cipherscope::analysis::shannon_entropy;
///
/// assert_eq!(shannon_entropy(b"aaaaaaaaa"), 0.0);
/// assert!(shannon_entropy(b"faa833") > 1.9);
/// ```
pub fn shannon_entropy(input: &[u8]) -> f64 {
    let mut counts = [0usize; 256];
    for &b in input {
        counts[b as usize] += 1;
    }

    let len = input.len() as f64;
    let mut entropy = 0.0;
    for &count in counts.iter() {
        if count == 0 {
            continue;
        }
        let p = count as f64 / len;
        entropy -= p * p.log2();
    }
    entropy
}

/// Coarse classification of a byte stream by its Shannon entropy.
///
/// The variants follow the exported threshold constants; the bands between
/// them cover repetitive low-entropy data and dense structured binary that
/// is neither prose nor noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ByteClass {
    /// Below [`ENTROPY_LOW`]: padding, runs, near-constant data.
    NearConstant,
    /// Between [`ENTROPY_LOW`] and [`ENTROPY_ENGLISH_START`]: repetitive or
    /// narrowly distributed data.
    Repetitive,
    /// Within the English band: typical natural-language text.
    NaturalLanguage,
    /// Between [`ENTROPY_ENGLISH_END`] and [`ENTROPY_COMPRESSED`]: dense
    /// structured data such as machine code.
    Structured,
    /// Above [`ENTROPY_COMPRESSED`]: effectively random, as in compressed
    /// or encrypted data.
    Random,
}

impl ByteClass {
    /// Classify an entropy value, in bits per byte.
    pub fn from_entropy(entropy: f64) -> Self {
        if entropy < ENTROPY_LOW {
            Self::NearConstant
        } else if entropy < ENTROPY_ENGLISH_START {
            Self::Repetitive
        } else if entropy <= ENTROPY_ENGLISH_END {
            Self::NaturalLanguage
        } else if entropy <= ENTROPY_COMPRESSED {
            Self::Structured
        } else {
            Self::Random
        }
    }

    /// Classify a byte sequence directly.
    pub fn of(input: &[u8]) -> Self {
        Self::from_entropy(shannon_entropy(input))
    }
}
