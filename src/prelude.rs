//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use cipherscope::prelude::*;
//!
//! let shifted = caesar_shift(b"hello", 3);
//! assert_eq!(a1z26_encode(&shifted), [11, 8, 15, 15, 18]);
//! ```

pub use crate::analysis::{
    index_of_coincidence, letter_distribution, shannon_entropy, ByteClass, TextProfile,
    ENTROPY_COMPRESSED, ENTROPY_ENGLISH_END, ENTROPY_ENGLISH_START, ENTROPY_LOW, IOC_ENGLISH,
};
pub use crate::cipher::{
    a1z26_decode, a1z26_encode, a1z26_parse, caesar_shift, caesar_shift_keyed, caesar_shifts,
};
pub use crate::ALPHABET_LEN;
