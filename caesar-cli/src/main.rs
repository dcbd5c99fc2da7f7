use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use caesar_cipher::{apply, apply_inverse, apply_random_os, crack};

mod error;
use error::Result;

/// Command-line arguments for the Caesar cipher toolkit.
#[derive(Parser, Debug)]
#[command(
    about = "Caesar cipher over ASCII A-Z/a-z with a Portuguese frequency cracker",
    after_help = "Text is read from stdin and written to stdout. Only ASCII \
        letters are shifted; accents and other UTF-8 bytes pass through \
        unchanged. encrypt-random never reveals the drawn shift.\n\n\
        Examples:\n  \
        echo \"O importante nao e vencer\" | caesar-cli encrypt 7\n  \
        echo \"...\" | caesar-cli encrypt-random\n  \
        echo \"...\" | caesar-cli crack"
)]
struct Cli {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Encrypt stdin with the given shift
    #[command(allow_negative_numbers = true)]
    Encrypt {
        /// Shift amount; any integer, normalized into 0-25
        shift: i32,
    },
    /// Decrypt stdin with the given shift
    #[command(allow_negative_numbers = true)]
    Decrypt {
        /// Shift amount; any integer, normalized into 0-25
        shift: i32,
    },
    /// Encrypt stdin under a random shift that is never revealed
    EncryptRandom,
    /// Recover the shift of a Portuguese ciphertext read from stdin
    Crack,
}

fn main() -> ExitCode {
    let cli: Cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<()> {
    // Read everything from stdin as raw bytes
    let mut input: Vec<u8> = Vec::new();
    io::stdin().read_to_end(&mut input)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.mode {
        Mode::Encrypt { shift } => out.write_all(&apply(&input, shift))?,
        Mode::Decrypt { shift } => out.write_all(&apply_inverse(&input, shift))?,
        Mode::EncryptRandom => out.write_all(&apply_random_os(&input))?,
        Mode::Crack => {
            let result = crack(&input);
            writeln!(out, "Best shift: {}", result.best_shift)?;
            writeln!(out, "Score: {}", result.best_score)?;
            writeln!(out, "Decrypted text:")?;
            out.write_all(&result.best_plaintext)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_encrypt_with_shift() {
        let cli = Cli::try_parse_from(["caesar-cli", "encrypt", "7"]).unwrap();
        assert!(matches!(cli.mode, Mode::Encrypt { shift: 7 }));
    }

    #[test]
    fn test_accepts_negative_and_large_shifts() {
        let cli = Cli::try_parse_from(["caesar-cli", "decrypt", "-3"]).unwrap();
        assert!(matches!(cli.mode, Mode::Decrypt { shift: -3 }));

        let cli = Cli::try_parse_from(["caesar-cli", "encrypt", "1000"]).unwrap();
        assert!(matches!(cli.mode, Mode::Encrypt { shift: 1000 }));

        // The whole i32 range is accepted; normalization (and safe
        // negation for decrypt) happens in the core.
        let cli = Cli::try_parse_from(["caesar-cli", "decrypt", "-2147483648"]).unwrap();
        assert!(matches!(cli.mode, Mode::Decrypt { shift: i32::MIN }));
    }

    #[test]
    fn test_missing_shift_is_an_error() {
        assert!(Cli::try_parse_from(["caesar-cli", "encrypt"]).is_err());
    }

    #[test]
    fn test_non_numeric_shift_is_an_error() {
        assert!(Cli::try_parse_from(["caesar-cli", "encrypt", "abc"]).is_err());
    }

    #[test]
    fn test_unknown_mode_is_an_error() {
        assert!(Cli::try_parse_from(["caesar-cli", "rot13"]).is_err());
    }

    #[test]
    fn test_modes_without_shift() {
        assert!(Cli::try_parse_from(["caesar-cli", "encrypt-random"]).is_ok());
        assert!(Cli::try_parse_from(["caesar-cli", "crack"]).is_ok());
    }
}
