use std::str::FromStr;

use strum::{Display, EnumIter, EnumString};

use crate::error::{Error, Result};
use crate::types::Parameter;

/// The cipher variants, selectable by name.
///
/// Names parse case-insensitively, either in short form (`"caesar"`) or as
/// the full display label (`"Caesar Cipher"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum CipherKind {
    #[strum(to_string = "caesar", serialize = "caesar cipher")]
    Caesar,

    #[strum(to_string = "vigenere", serialize = "vigenere cipher", serialize = "vigenère", serialize = "vigenère cipher")]
    Vigenere,

    #[strum(to_string = "substitution", serialize = "substitution cipher")]
    Substitution,

    #[strum(to_string = "affine", serialize = "affine cipher")]
    Affine,

    #[strum(to_string = "transposition", serialize = "transposition cipher")]
    Transposition,

    #[strum(to_string = "atbash", serialize = "atbash cipher")]
    Atbash,

    #[strum(to_string = "morse", serialize = "morse code")]
    Morse,
}

impl CipherKind {
    /// Looks a variant up by name, ignoring surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCipherVariant`] if no variant has that name.
    pub fn from_name(name: &str) -> Result<Self> {
        let name = name.trim();
        Self::from_str(name).map_err(|_| Error::UnknownCipherVariant(name.to_owned()))
    }

    /// Human-readable label for menus and tables.
    pub fn label(self) -> &'static str {
        match self {
            Self::Caesar => "Caesar Cipher",
            Self::Vigenere => "Vigenère Cipher",
            Self::Substitution => "Substitution Cipher",
            Self::Affine => "Affine Cipher",
            Self::Transposition => "Transposition Cipher",
            Self::Atbash => "Atbash Cipher",
            Self::Morse => "Morse Code",
        }
    }

    /// The secondary input this variant needs.
    pub fn parameter(self) -> Parameter {
        match self {
            Self::Caesar | Self::Affine => Parameter::Shift,
            Self::Vigenere | Self::Transposition => Parameter::Keyword,
            Self::Substitution => Parameter::Alphabet,
            Self::Atbash | Self::Morse => Parameter::None,
        }
    }
}
