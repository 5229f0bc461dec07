use crate::alphabet::{position, upper};
use crate::cipher::TextCipher;
use crate::config::ALPHABET_LEN;

/// Atbash mirror cipher: A↔Z, B↔Y, ...
///
/// Keyless and self-inverse. Letters are upper-cased before mirroring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Atbash;

impl TextCipher for Atbash {
    fn encrypt(&self, message: &str) -> String {
        message.chars().map(|c| position(c).map_or(c, |p| upper(ALPHABET_LEN - 1 - p))).collect()
    }

    fn decrypt(&self, message: &str) -> String {
        self.encrypt(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror() {
        assert_eq!(Atbash.encrypt("ABCXYZ"), "ZYXCBA");
        assert_eq!(Atbash.encrypt("wizard"), "DRAZIW");
    }

    #[test]
    fn test_non_letters_pass_through() {
        assert_eq!(Atbash.encrypt("Hi, 2 U!"), "SR, 2 F!");
    }

    #[test]
    fn test_self_inverse() {
        let once = Atbash.encrypt("Hello");
        assert_eq!(Atbash.decrypt(&once), "HELLO");
        assert_eq!(Atbash.encrypt(&once), "HELLO");
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(Atbash.encrypt(""), "");
    }
}
