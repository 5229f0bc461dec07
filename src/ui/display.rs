//! Display utilities for results and cipher information.

use anyhow::{Context, Result, anyhow};
use ciphercat::cipher::CipherKind;
use ciphercat::config::APP_NAME;
use ciphercat::types::Mode;
use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;
use console::{Term, style};
use figlet_rs::FIGfont;
use strum::IntoEnumIterator;

/// Builds the table of cipher variants shown by `list`.
pub fn cipher_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Name", "Cipher", "Key"]);

    for kind in CipherKind::iter() {
        table.add_row(vec![kind.to_string(), kind.label().to_owned(), kind.parameter().to_string()]);
    }

    table
}

/// Prints the table of cipher variants.
pub fn show_cipher_table() {
    println!("{}", cipher_table());
}

/// Displays the outcome of a cipher run.
///
/// # Arguments
/// * `kind` - The cipher that ran
/// * `mode` - The direction it ran in
/// * `output` - The transformed text
pub fn show_result(kind: CipherKind, mode: Mode, output: &str) {
    println!();
    println!("{} {}", style("✓").green(), style(format!("{} {}:", kind.label(), mode.past_tense())).bold());
    println!("  {}", style(output).cyan());
    println!();
}

/// Displays a cipher error without ending the session.
pub fn show_error(err: &ciphercat::Error) {
    println!();
    println!("{}", error_line(err));
    println!();
}

fn error_line(err: &ciphercat::Error) -> String {
    format!("{} {}", style("✗").red(), style(err).red().bold())
}

/// Clears the terminal screen.
pub fn clear_screen() -> Result<()> {
    Term::stdout().clear_screen().map_err(|e| anyhow!("failed to clear screen: {e}"))
}

/// Prints the application banner.
pub fn print_banner() -> Result<()> {
    let font = FIGfont::standard().map_err(|e| anyhow!("failed to load banner font: {e}"))?;
    let banner = font.convert(APP_NAME).context("failed to render banner")?;

    println!("{}", style(banner).green().bold());
    Ok(())
}
