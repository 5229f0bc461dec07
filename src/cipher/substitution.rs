//! Monoalphabetic substitution cipher.
//!
//! The key is a permutation of the alphabet: the i-th key letter replaces the
//! i-th letter of `A..Z`. Lookup ignores case and every substituted letter
//! comes out upper-case, so a round trip upper-cases the message.

use crate::alphabet::position;
use crate::cipher::TextCipher;
use crate::config::{ALPHABET, ALPHABET_LEN};
use crate::error::{Error, Result};

const LETTERS: usize = ALPHABET_LEN as usize;

/// Substitution cipher over a validated permutation key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Substitution {
    forward: [char; LETTERS],
    inverse: [char; LETTERS],
}

impl Substitution {
    /// Builds the cipher from a 26-letter key.
    ///
    /// The key is upper-cased before validation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if the key is empty, does not hold
    /// exactly 26 characters, contains a non-letter, or repeats a letter.
    pub fn new(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(Error::InvalidKey("key cannot be empty".into()));
        }

        let key: Vec<char> = key.chars().map(|c| c.to_ascii_uppercase()).collect();
        if key.len() != LETTERS {
            return Err(Error::InvalidKey(format!("key must contain exactly {LETTERS} letters, got {}", key.len())));
        }

        let mut forward = ['A'; LETTERS];
        let mut inverse = ['A'; LETTERS];
        let mut seen = [false; LETTERS];

        for (i, (plain, &k)) in ALPHABET.chars().zip(&key).enumerate() {
            let Some(p) = position(k) else {
                return Err(Error::InvalidKey(format!("'{k}' is not a letter")));
            };

            let p = usize::from(p);
            if seen[p] {
                return Err(Error::InvalidKey(format!("letter '{k}' appears more than once")));
            }

            seen[p] = true;
            forward[i] = k;
            inverse[p] = plain;
        }

        Ok(Self { forward, inverse })
    }

    fn substitute(message: &str, table: &[char; LETTERS]) -> String {
        message.chars().map(|c| position(c).map_or(c, |p| table[usize::from(p)])).collect()
    }
}

impl TextCipher for Substitution {
    fn encrypt(&self, message: &str) -> String {
        Self::substitute(message, &self.forward)
    }

    fn decrypt(&self, message: &str) -> String {
        Self::substitute(message, &self.inverse)
    }
}
