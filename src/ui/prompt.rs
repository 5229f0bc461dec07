//! Interactive prompts for wizard mode.
//!
//! Mirrors the flow of a form: pick a cipher, type the message, supply the
//! key or shift the cipher asks for, then choose a direction.

use anyhow::{Result, anyhow};
use ciphercat::cipher::{Cipher, CipherKind};
use ciphercat::types::{Mode, Parameter};
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, CustomUserError, Select, Text};
use strum::IntoEnumIterator;

/// Interactive prompt handler for wizard mode.
pub struct Prompt {
    /// Rows shown at once in selection menus.
    page_size: usize,
}

impl Prompt {
    pub fn new(page_size: usize) -> Self {
        Self { page_size }
    }

    /// Prompts the user to pick a cipher variant by its label.
    ///
    /// # Errors
    ///
    /// Returns an error if the menu cannot be shown or the user cancels.
    pub fn select_cipher(&self) -> Result<CipherKind> {
        let kinds: Vec<CipherKind> = CipherKind::iter().collect();
        let labels: Vec<&str> = kinds.iter().map(|kind| kind.label()).collect();

        let choice = Select::new("Select cipher", labels).with_page_size(self.page_size).raw_prompt().map_err(|e| anyhow!("cipher selection failed: {e}"))?;

        Ok(kinds[choice.index])
    }

    /// Prompts the user to choose between encrypting and decrypting.
    pub fn select_mode(&self) -> Result<Mode> {
        Select::new("Select operation", Mode::ALL.to_vec()).with_page_size(self.page_size).prompt().map_err(|e| anyhow!("mode selection failed: {e}"))
    }

    /// Prompts for the message to transform. Empty input is allowed.
    pub fn prompt_message(&self) -> Result<String> {
        Text::new("Message").prompt().map_err(|e| anyhow!("message input failed: {e}"))
    }

    /// Prompts for the key or shift `kind` needs, if any.
    ///
    /// Shifts must parse as integers before the prompt accepts them. Keys are
    /// checked against the cipher's own validation so mistakes surface while
    /// the user is still typing.
    ///
    /// # Returns
    ///
    /// The raw parameter text, or `None` for keyless ciphers.
    pub fn prompt_parameter(&self, kind: CipherKind) -> Result<Option<String>> {
        let parameter = kind.parameter();
        let Some(label) = parameter.label() else {
            return Ok(None);
        };

        let input = match parameter {
            Parameter::Shift => CustomType::<i64>::new(label).with_error_message("Shift must be an integer.").prompt().map(|shift| shift.to_string()),
            _ => Text::new(label).with_validator(move |input: &str| -> Result<Validation, CustomUserError> { Ok(validate_key(kind, input)) }).prompt(),
        };

        input.map(Some).map_err(|e| anyhow!("{} input failed: {e}", label.to_lowercase()))
    }

    /// Asks whether to run another cipher. Defaults to yes.
    pub fn confirm_another(&self) -> Result<bool> {
        Confirm::new("Run another cipher?").with_default(true).prompt().map_err(|e| anyhow!("confirmation failed: {e}"))
    }
}

fn validate_key(kind: CipherKind, input: &str) -> Validation {
    match Cipher::new(kind, Some(input)) {
        Ok(_) => Validation::Valid,
        Err(err) => Validation::Invalid(err.to_string().into()),
    }
}

#[cfg(test)]
mod tests {
    use inquire::validator::ErrorMessage;

    use super::*;

    #[test]
    fn test_validate_key_accepts_good_keys() {
        assert!(matches!(validate_key(CipherKind::Vigenere, "LEMON"), Validation::Valid));
        assert!(matches!(validate_key(CipherKind::Substitution, "QWERTYUIOPASDFGHJKLZXCVBNM"), Validation::Valid));
    }

    #[test]
    fn test_validate_key_reports_library_error() {
        assert!(matches!(
            validate_key(CipherKind::Transposition, ""),
            Validation::Invalid(ErrorMessage::Custom(message)) if message == "invalid key: key cannot be empty"
        ));
        assert!(matches!(validate_key(CipherKind::Substitution, "ABC"), Validation::Invalid(_)));
    }
}
