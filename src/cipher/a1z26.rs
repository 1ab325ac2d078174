//! A1Z26 numeric letter encoding.
//!
//! A1Z26 maps letters to their 1-based alphabet position (A/a → 1 … Z/z →
//! 26) and back. [`a1z26_parse`] additionally rewrites free-form text,
//! replacing embedded decimal numbers that decode as letter positions while
//! leaving everything else untouched.

use crate::ALPHABET_LEN;

/// Encode every letter of `input` as its 1-based alphabet position.
///
/// Case is ignored and non-alphabetic bytes contribute no output element,
/// so the result length equals the number of letters in the input.
///
/// # Examples
///
/// ```
/// use cipherscope::cipher::a1z26_encode;
///
/// assert_eq!(a1z26_encode(b"abc-xyz"), [1, 2, 3, 24, 25, 26]);
/// ```
pub fn a1z26_encode(input: &[u8]) -> Vec<u8> {
    input
        .iter()
        .filter(|b| b.is_ascii_alphabetic())
        .map(|&b| b.to_ascii_lowercase() - b'a' + 1)
        .collect()
}

/// Decode alphabet positions back into uppercase letters.
///
/// Each symbol in `[1, 26]` emits the corresponding letter; anything else is
/// silently dropped. Callers that need validation must compare input and
/// output lengths themselves.
///
/// # Examples
///
/// ```
/// use cipherscope::cipher::a1z26_decode;
///
/// assert_eq!(a1z26_decode(&[1, 2, 3, 24, 25, 26]), b"ABCXYZ");
/// assert_eq!(a1z26_decode(&[0, 27, 43, 99]), b"");
/// ```
pub fn a1z26_decode(symbols: &[u8]) -> Vec<u8> {
    symbols
        .iter()
        .filter(|&&s| (1..=ALPHABET_LEN as u8).contains(&s))
        .map(|&s| b'A' + s - 1)
        .collect()
}

/// Replace embedded A1Z26 codes in free-form text with their letters.
///
/// The input is scanned once, left to right. Consecutive decimal digits are
/// gathered into maximal runs; a run of one or two digits whose value
/// decodes as a letter position is replaced by that single letter, and any
/// other run is emitted verbatim. Runs are never split into smaller numbers,
/// so `300` stays `300` even though `3` would decode. Non-digit bytes pass
/// through unchanged.
///
/// # Examples
///
/// ```
/// use cipherscope::cipher::a1z26_parse;
///
/// assert_eq!(a1z26_parse(b"0 1 000 3 10 100 4 300"), b"0 A 000 C J 100 D 300");
/// ```
pub fn a1z26_parse(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut run: Vec<u8> = Vec::new();

    for &b in input {
        if b.is_ascii_digit() {
            run.push(b);
        } else {
            close_digit_run(&mut run, &mut out);
            out.push(b);
        }
    }
    close_digit_run(&mut run, &mut out);
    out
}

/// Close a pending digit run: replace a decodable 1–2 digit run with its
/// letter, emit anything else verbatim. The run buffer is left empty.
fn close_digit_run(run: &mut Vec<u8>, out: &mut Vec<u8>) {
    if run.is_empty() {
        return;
    }
    if run.len() <= 2 {
        let value = run.iter().fold(0u8, |acc, &d| acc * 10 + (d - b'0'));
        let decoded = a1z26_decode(&[value]);
        if !decoded.is_empty() {
            out.extend_from_slice(&decoded);
            run.clear();
            return;
        }
    }
    out.append(run);
}
