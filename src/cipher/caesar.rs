use crate::alphabet::{negate, reduce, rotate};
use crate::cipher::TextCipher;

/// Caesar shift cipher.
///
/// Every letter moves `shift` places along the alphabet within its own case.
/// Any integer shift is accepted and reduced modulo 26.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Caesar {
    shift: u8,
}

impl Caesar {
    pub fn new(shift: i64) -> Self {
        Self { shift: reduce(shift) }
    }

    /// The shift after reduction into `0..26`.
    #[inline]
    pub const fn shift(&self) -> u8 {
        self.shift
    }
}

impl TextCipher for Caesar {
    fn encrypt(&self, message: &str) -> String {
        message.chars().map(|c| rotate(c, self.shift)).collect()
    }

    fn decrypt(&self, message: &str) -> String {
        let back = negate(self.shift);
        message.chars().map(|c| rotate(c, back)).collect()
    }
}
