//! Error types for the cipher library.

use thiserror::Error;

/// Result type for cipher construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while building a cipher from user input.
///
/// Transformations themselves never fail; every check happens when the
/// cipher is constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key is empty, not a permutation of the alphabet, or a multiplier
    /// without an inverse modulo 26.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Shift parameter is missing or not an integer.
    #[error("invalid shift: {0}")]
    InvalidShift(String),

    /// No cipher is registered under the requested name.
    #[error("unknown cipher variant: {0}")]
    UnknownCipherVariant(String),
}
