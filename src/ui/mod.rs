//! User interface components for terminal interaction.
//!
//! # Modules
//!
//! - [`display`]: Banner, cipher table, results and errors
//! - [`prompt`]: Interactive selection and input dialogs

pub mod display;
pub mod prompt;
