use std::io::{IsTerminal, Read, stdin};

use anyhow::{Context, Result, bail};
use ciphercat::cipher::{Cipher, CipherKind};
use ciphercat::config::MENU_PAGE_SIZE;
use ciphercat::types::Mode;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::{Level, info};

use crate::ui::display;
use crate::ui::prompt::Prompt;

#[derive(Args, Debug)]
pub struct CipherArgs {
    /// Cipher variant, e.g. "caesar" or "Vigenere Cipher" (see `list`).
    #[arg(short, long)]
    cipher: String,

    /// Shift or key, depending on the cipher.
    #[arg(short, long, allow_hyphen_values = true)]
    key: Option<String>,

    /// Message to transform (read from stdin when omitted).
    message: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt a message (Morse: encode).
    Encrypt(CipherArgs),

    /// Decrypt a message (Morse: decode).
    Decrypt(CipherArgs),

    /// List the available ciphers and the key each one takes.
    List,

    /// Start interactive mode.
    Interactive,
}

#[derive(Parser, Debug)]
#[command(name = "ciphercat", version, about = "Encrypt and decrypt text with classical ciphers. Run without arguments for interactive mode.")]
pub struct App {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl App {
    pub fn init() -> Result<Self> {
        let app = Self::parse();
        let subscriber = tracing_subscriber::fmt().with_max_level(app.log_level()).with_writer(std::io::stderr).with_file(true).with_line_number(true).finish();
        tracing::subscriber::set_global_default(subscriber)?;
        Ok(app)
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Some(Commands::Encrypt(args)) => Self::run_mode(args, Mode::Encrypt),
            Some(Commands::Decrypt(args)) => Self::run_mode(args, Mode::Decrypt),
            Some(Commands::List) => {
                display::show_cipher_table();
                Ok(())
            }
            Some(Commands::Interactive) | None => Self::run_interactive(&Prompt::new(MENU_PAGE_SIZE)),
        }
    }

    fn run_mode(args: CipherArgs, mode: Mode) -> Result<()> {
        let kind = CipherKind::from_name(&args.cipher)?;
        let cipher = Cipher::new(kind, args.key.as_deref()).with_context(|| format!("cannot set up {}", kind.label()))?;

        let message = match args.message {
            Some(message) => message,
            None => read_message()?,
        };

        info!(cipher = %kind, %mode, "processing message");
        println!("{}", cipher.apply(mode, &message));

        Ok(())
    }

    fn run_interactive(prompt: &Prompt) -> Result<()> {
        display::clear_screen()?;
        display::print_banner()?;

        loop {
            let kind = prompt.select_cipher()?;
            let message = prompt.prompt_message()?;
            let parameter = prompt.prompt_parameter(kind)?;
            let mode = prompt.select_mode()?;

            match Cipher::new(kind, parameter.as_deref()) {
                Ok(cipher) => display::show_result(kind, mode, &cipher.apply(mode, &message)),
                Err(err) => display::show_error(&err),
            }

            if !prompt.confirm_another()? {
                return Ok(());
            }
        }
    }
}

fn read_message() -> Result<String> {
    let input = stdin();
    let interactive = input.is_terminal();
    read_message_from(input.lock(), interactive)
}

/// Reads a piped message, refusing input that comes from a terminal.
fn read_message_from(mut input: impl Read, interactive: bool) -> Result<String> {
    if interactive {
        bail!("no message given: pass it as an argument or pipe it on stdin");
    }

    let mut message = String::new();
    input.read_to_string(&mut message).context("failed to read message from stdin")?;

    Ok(strip_trailing_newline(message))
}

/// Drops one trailing line ending, as left by `echo` or a heredoc.
fn strip_trailing_newline(mut message: String) -> String {
    if message.ends_with('\n') {
        message.pop();
        if message.ends_with('\r') {
            message.pop();
        }
    }
    message
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        App::command().debug_assert();
    }

    #[test]
    fn test_parse_encrypt_with_negative_shift() {
        let app = App::try_parse_from(["ciphercat", "encrypt", "--cipher", "caesar", "--key", "-3", "DEF"]).unwrap();
        let Some(Commands::Encrypt(args)) = app.command else { panic!("expected encrypt") };

        assert_eq!(args.cipher, "caesar");
        assert_eq!(args.key.as_deref(), Some("-3"));
        assert_eq!(args.message.as_deref(), Some("DEF"));
    }

    #[test]
    fn test_parse_decrypt_without_message() {
        let app = App::try_parse_from(["ciphercat", "-vv", "decrypt", "-c", "morse"]).unwrap();
        assert_eq!(app.verbose, 2);
        assert_eq!(app.log_level(), Level::DEBUG);

        let Some(Commands::Decrypt(args)) = app.command else { panic!("expected decrypt") };
        assert!(args.key.is_none());
        assert!(args.message.is_none());
    }

    #[test]
    fn test_no_subcommand_means_interactive() {
        let app = App::try_parse_from(["ciphercat"]).unwrap();
        assert!(app.command.is_none());
        assert_eq!(app.log_level(), Level::WARN);
    }

    #[test]
    fn test_cipher_is_required() {
        assert!(App::try_parse_from(["ciphercat", "encrypt", "HELLO"]).is_err());
    }

    #[test]
    fn test_read_message_from_pipe() {
        let message = read_message_from("... --- ...\n".as_bytes(), false).unwrap();
        assert_eq!(message, "... --- ...");

        assert_eq!(read_message_from(&b""[..], false).unwrap(), "");
    }

    #[test]
    fn test_read_message_refuses_terminal() {
        let err = read_message_from("ignored".as_bytes(), true).unwrap_err();
        assert!(err.to_string().contains("no message given"));
    }

    #[test]
    fn test_read_message_rejects_invalid_utf8() {
        let err = read_message_from(&[0xff_u8, 0xfe][..], false).unwrap_err();
        assert!(err.to_string().contains("failed to read message from stdin"));
    }

    #[test]
    fn test_strip_trailing_newline() {
        assert_eq!(strip_trailing_newline("SOS\n".into()), "SOS");
        assert_eq!(strip_trailing_newline("SOS\r\n".into()), "SOS");
        assert_eq!(strip_trailing_newline("SOS\n\n".into()), "SOS\n");
        assert_eq!(strip_trailing_newline("SOS ".into()), "SOS ");
    }
}
