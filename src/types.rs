//! Common type definitions for CipherCat.
//!
//! - [`Mode`]: Distinguishes between encryption and decryption
//! - [`Parameter`]: The kind of secondary input a cipher needs

use std::fmt::{Display, Formatter, Result};

/// Direction of a cipher operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Plaintext to ciphertext (Morse: text to code).
    Encrypt,

    /// Ciphertext to plaintext (Morse: code to text).
    Decrypt,
}

impl Mode {
    /// Array containing all modes for iteration.
    pub const ALL: &'static [Self] = &[Self::Encrypt, Self::Decrypt];

    /// Returns a human-readable label for the mode.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Self::Encrypt => "Encrypt",
            Self::Decrypt => "Decrypt",
        }
    }

    /// Past-tense verb for result messages.
    #[inline]
    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Encrypt => "encrypted",
            Self::Decrypt => "decrypted",
        }
    }
}

impl Display for Mode {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.label())
    }
}

/// Secondary input a cipher variant takes besides the message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parameter {
    /// The cipher takes no key.
    None,

    /// Any integer, reduced modulo 26.
    Shift,

    /// A non-empty keyword.
    Keyword,

    /// A 26-letter permutation of the alphabet.
    Alphabet,
}

impl Parameter {
    /// Returns the prompt label for the parameter, if one is needed.
    #[inline]
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Shift => Some("Shift"),
            Self::Keyword => Some("Key"),
            Self::Alphabet => Some("Key alphabet"),
        }
    }
}

impl Display for Parameter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Shift => f.write_str("integer shift"),
            Self::Keyword => f.write_str("keyword"),
            Self::Alphabet => f.write_str("26-letter alphabet"),
        }
    }
}
