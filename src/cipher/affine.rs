//! Affine cipher: `p -> (a * p + b) mod 26`.
//!
//! The front end only asks for the shift `b`; the multiplier `a` defaults to
//! [`AFFINE_MULTIPLIER`]. Decryption multiplies by the inverse of `a`, so any
//! other multiplier has to be coprime with 26.

use crate::alphabet::{map_letter, mod_inverse, negate, reduce};
use crate::cipher::TextCipher;
use crate::config::{AFFINE_MULTIPLIER, AFFINE_MULTIPLIER_INVERSE, ALPHABET_LEN};
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Affine {
    multiplier: u8,
    inverse: u8,
    shift: u8,
}

impl Affine {
    /// Affine cipher with the default multiplier and the given shift.
    pub fn new(shift: i64) -> Self {
        Self { multiplier: reduce(AFFINE_MULTIPLIER), inverse: reduce(AFFINE_MULTIPLIER_INVERSE), shift: reduce(shift) }
    }

    /// Affine cipher with a caller-chosen multiplier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if `multiplier` has no inverse modulo 26.
    pub fn with_multiplier(multiplier: i64, shift: i64) -> Result<Self> {
        let inverse = mod_inverse(multiplier, i64::from(ALPHABET_LEN)).ok_or_else(|| Error::InvalidKey(format!("multiplier {multiplier} is not coprime with {ALPHABET_LEN}")))?;

        Ok(Self { multiplier: reduce(multiplier), inverse: reduce(inverse), shift: reduce(shift) })
    }

    #[inline]
    pub const fn multiplier(&self) -> u8 {
        self.multiplier
    }

    #[inline]
    pub const fn shift(&self) -> u8 {
        self.shift
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn mul_mod(a: u8, b: u8) -> u8 {
    ((u16::from(a) * u16::from(b)) % u16::from(ALPHABET_LEN)) as u8
}

impl TextCipher for Affine {
    fn encrypt(&self, message: &str) -> String {
        message.chars().map(|c| map_letter(c, |p| mul_mod(self.multiplier, p) + self.shift)).collect()
    }

    fn decrypt(&self, message: &str) -> String {
        let back = negate(self.shift);
        message.chars().map(|c| map_letter(c, |p| mul_mod(self.inverse, p + back))).collect()
    }
}
