//! Global Configuration Constants
//!
//! Fixed parameters shared by the ciphers and the terminal front end.

/// Application name used in the banner and command-line help.
pub const APP_NAME: &str = "CipherCat";

/// The alphabet every letter cipher operates over, in order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of letters in [`ALPHABET`].
pub const ALPHABET_LEN: u8 = 26;

// === Affine ===

/// Multiplier used by the Affine cipher when none is given.
///
/// Must be coprime with [`ALPHABET_LEN`].
pub const AFFINE_MULTIPLIER: i64 = 5;

/// Inverse of [`AFFINE_MULTIPLIER`] modulo [`ALPHABET_LEN`].
pub const AFFINE_MULTIPLIER_INVERSE: i64 = 21;

// === Transposition ===

/// Character appended to fill the last row of the transposition grid.
pub const PAD_CHAR: char = ' ';

// === Morse ===

/// Separator placed between Morse tokens.
pub const MORSE_SEPARATOR: char = ' ';

/// Token emitted for characters (or codes) missing from the Morse table.
pub const MORSE_UNKNOWN: &str = "?";

// === Interactive mode ===

/// Number of rows shown at once in selection menus.
pub const MENU_PAGE_SIZE: usize = 7;
