//! CipherCat - Classical ciphers over the Latin alphabet.
//!
//! A collection of reversible text transformations, each a pure function of
//! a message and a cipher-specific parameter:
//! - Caesar and Affine shifts
//! - Vigenère keyword shifting
//! - Monoalphabetic substitution and Atbash mirroring
//! - Columnar transposition
//! - Morse code
//!
//! None of these provide any security. They operate on the 26 ASCII letters
//! and pass every other character through.
//!
//! # Examples
//!
//! ```
//! use ciphercat::cipher::{Caesar, TextCipher, Vigenere};
//!
//! assert_eq!(Caesar::new(3).encrypt("ABC"), "DEF");
//!
//! let vigenere = Vigenere::new("LEMON").unwrap();
//! assert_eq!(vigenere.encrypt("ATTACKATDAWN"), "LXFOPVEFRNHR");
//! ```
//!
//! Selecting a variant by name, the way a front end does:
//!
//! ```
//! use ciphercat::cipher::{Cipher, CipherKind};
//! use ciphercat::types::Mode;
//!
//! let kind: CipherKind = "Transposition Cipher".parse().unwrap();
//! let cipher = Cipher::new(kind, Some("KEY")).unwrap();
//! assert_eq!(cipher.apply(Mode::Encrypt, "HELLOWORLD"), "HLODEOR LWL ");
//! ```

pub mod alphabet;
pub mod cipher;
pub mod config;
pub mod error;
pub mod types;

pub use error::{Error, Result};
