//! # Classical Cipher Module
//!
//! Each cipher lives in its own submodule as a small immutable value holding
//! only its validated parameter. They all implement [`TextCipher`], and the
//! [`Cipher`] enum bundles them behind one entry point for callers that pick
//! a variant at runtime.
//!
//! ## Architecture
//!
//! - **Variant Layer**: [`Caesar`], [`Vigenere`], [`Substitution`], [`Affine`],
//!   [`Transposition`], [`Atbash`] and the [`Morse`] codec
//! - **Registry Layer**: [`CipherKind`] names the variants and the parameter each needs
//! - **Dispatch Layer**: [`Cipher`] is built from a kind plus raw parameter text,
//!   validating it once, then routes calls with a single `match`
//!
//! Construction is the only fallible step. Once a cipher exists, encrypting
//! and decrypting are total functions over any `&str`.

use tap::Tap;
use tracing::{debug, trace};

mod affine;
mod atbash;
mod caesar;
mod kind;
mod morse;
mod substitution;
mod transposition;
mod vigenere;

pub use affine::Affine;
pub use atbash::Atbash;
pub use caesar::Caesar;
pub use kind::CipherKind;
pub use morse::Morse;
pub use substitution::Substitution;
pub use transposition::Transposition;
pub use vigenere::Vigenere;

use crate::error::{Error, Result};
use crate::types::{Mode, Parameter};

/// # Text Cipher Trait
///
/// The `{encrypt, decrypt}` capability shared by every variant.
///
/// For the letter ciphers `decrypt(encrypt(m)) == m`, except that
/// [`Substitution`] and [`Atbash`] upper-case letters and [`Transposition`]
/// keeps its trailing pad spaces. [`Morse`] maps the pair onto
/// encode/decode.
pub trait TextCipher {
    fn encrypt(&self, message: &str) -> String;

    fn decrypt(&self, message: &str) -> String;
}

/// # Unified Cipher
///
/// A cipher variant together with its validated parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cipher {
    Caesar(Caesar),
    Vigenere(Vigenere),
    Substitution(Substitution),
    Affine(Affine),
    Transposition(Transposition),
    Atbash(Atbash),
    Morse(Morse),
}

impl Cipher {
    /// Builds a cipher of `kind` from raw parameter text.
    ///
    /// Shift parameters are trimmed and parsed as integers. Keyword and
    /// alphabet parameters are taken verbatim. Variants without a parameter
    /// ignore it.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidShift`] if a shift is missing or not an integer
    /// - [`Error::InvalidKey`] if a key is missing or fails the variant's checks
    pub fn new(kind: CipherKind, parameter: Option<&str>) -> Result<Self> {
        let key = || parameter.unwrap_or_default();

        let cipher = match kind {
            CipherKind::Caesar => Self::Caesar(Caesar::new(parse_shift(parameter)?)),
            CipherKind::Vigenere => Self::Vigenere(Vigenere::new(key())?),
            CipherKind::Substitution => Self::Substitution(Substitution::new(key())?),
            CipherKind::Affine => Self::Affine(Affine::new(parse_shift(parameter)?)),
            CipherKind::Transposition => Self::Transposition(Transposition::new(key())?),
            CipherKind::Atbash => Self::Atbash(Atbash),
            CipherKind::Morse => Self::Morse(Morse),
        };

        debug!(cipher = %kind, "cipher constructed");
        Ok(cipher)
    }

    /// Which variant this is.
    pub fn kind(&self) -> CipherKind {
        match self {
            Self::Caesar(_) => CipherKind::Caesar,
            Self::Vigenere(_) => CipherKind::Vigenere,
            Self::Substitution(_) => CipherKind::Substitution,
            Self::Affine(_) => CipherKind::Affine,
            Self::Transposition(_) => CipherKind::Transposition,
            Self::Atbash(_) => CipherKind::Atbash,
            Self::Morse(_) => CipherKind::Morse,
        }
    }

    /// Runs the cipher in the given direction.
    pub fn apply(&self, mode: Mode, message: &str) -> String {
        let output = match mode {
            Mode::Encrypt => self.encrypt(message),
            Mode::Decrypt => self.decrypt(message),
        };

        output.tap(|output| debug!(cipher = %self.kind(), %mode, input_chars = message.chars().count(), output_chars = output.chars().count(), "cipher applied"))
    }
}

impl TextCipher for Cipher {
    fn encrypt(&self, message: &str) -> String {
        match self {
            Self::Caesar(c) => c.encrypt(message),
            Self::Vigenere(c) => c.encrypt(message),
            Self::Substitution(c) => c.encrypt(message),
            Self::Affine(c) => c.encrypt(message),
            Self::Transposition(c) => c.encrypt(message),
            Self::Atbash(c) => c.encrypt(message),
            Self::Morse(c) => c.encrypt(message),
        }
    }

    fn decrypt(&self, message: &str) -> String {
        match self {
            Self::Caesar(c) => c.decrypt(message),
            Self::Vigenere(c) => c.decrypt(message),
            Self::Substitution(c) => c.decrypt(message),
            Self::Affine(c) => c.decrypt(message),
            Self::Transposition(c) => c.decrypt(message),
            Self::Atbash(c) => c.decrypt(message),
            Self::Morse(c) => c.decrypt(message),
        }
    }
}

/// Parses shift text the way the front end receives it.
fn parse_shift(parameter: Option<&str>) -> Result<i64> {
    let raw = parameter.ok_or_else(|| Error::InvalidShift(format!("{} is required", Parameter::Shift)))?;
    let shift = raw.trim().parse::<i64>().map_err(|_| Error::InvalidShift(format!("'{}' is not an integer", raw.trim())))?;

    trace!(shift, "parsed shift");
    Ok(shift)
}
