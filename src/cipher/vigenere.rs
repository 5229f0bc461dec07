//! Vigenère keyword cipher.
//!
//! The key is repeated under the message and each letter is shifted by the
//! key letter above it. Pairing is positional: spaces and punctuation pass
//! through unchanged but still consume a key letter, so the key drifts out
//! of step with the letters of messages that contain non-letters. Existing
//! ciphertexts depend on this, so it is kept.

use crate::alphabet::{map_letter, negate, reduce};
use crate::cipher::TextCipher;
use crate::error::{Error, Result};

/// Vigenère cipher with a validated, non-empty key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vigenere {
    /// Shift of each key character, in key order.
    offsets: Vec<u8>,
}

impl Vigenere {
    /// Builds the cipher from a keyword.
    ///
    /// Key letters are read case-insensitively. Other key characters are
    /// reduced to an offset from `'A'` modulo 26.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if the key is empty.
    pub fn new(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(Error::InvalidKey("key cannot be empty".into()));
        }

        let offsets = key.chars().map(key_offset).collect();
        Ok(Self { offsets })
    }

    fn transform(&self, message: &str, offset: impl Fn(u8) -> u8) -> String {
        message
            .chars()
            .zip(self.offsets.iter().cycle())
            .map(|(c, &k)| {
                let k = offset(k);
                map_letter(c, |p| p + k)
            })
            .collect()
    }
}

/// Offset of a key character from `'A'` after ASCII upper-casing, modulo 26.
///
/// Non-ASCII characters keep their code point: `'ß'` (U+00DF) gives 2.
fn key_offset(k: char) -> u8 {
    reduce(i64::from(u32::from(k.to_ascii_uppercase())) - i64::from(b'A'))
}

impl TextCipher for Vigenere {
    fn encrypt(&self, message: &str) -> String {
        self.transform(message, |k| k)
    }

    fn decrypt(&self, message: &str) -> String {
        self.transform(message, negate)
    }
}
