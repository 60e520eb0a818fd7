//! Fugu CLI - Command-line tool for Blowfish string encryption and SHA-1
//! digests.
//!
//! The binary is named `fugu-cli` to avoid conflicts with the `fugu`
//! library crate.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "fugu-cli",
    about = "Command-line tool for Blowfish string encryption and SHA-1 digests",
    long_about = None,
    after_help = "EXAMPLES:
    # Encrypt a string with a password (fresh random IV)
    fugu-cli encrypt -p hunter2 \"attack at dawn\"

    # Decrypt it again
    fugu-cli decrypt -p hunter2 <hex string>

    # Print the SHA-1 digest of a string
    fugu-cli digest \"hello world\"

    # Run the built-in known-answer vectors
    fugu-cli selftest"
)]
#[command(version)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(global = true, short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(global = true, short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,

    /// Disable colored output
    #[arg(global = true, long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a string with a password
    Encrypt {
        /// Text to encrypt
        text: String,
        /// Password the key is derived from
        #[arg(short, long)]
        password: String,
        /// Fixed IV as 16 hex characters (default: fresh random IV)
        #[arg(long)]
        iv: Option<String>,
    },
    /// Decrypt a hex string produced by `encrypt`
    Decrypt {
        /// Hex ciphertext to decrypt
        text: String,
        /// Password the key is derived from
        #[arg(short, long)]
        password: String,
    },
    /// Print the SHA-1 digest of a string
    Digest {
        /// Text to hash
        text: String,
        /// Hash the big-endian UTF-16 encoding instead of UTF-8
        /// (the encoding the encrypt key derivation uses)
        #[arg(long)]
        utf16: bool,
    },
    /// Run the built-in known-answer vectors
    Selftest,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Configure logging based on verbosity
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    match cli.command {
        Commands::Encrypt { text, password, iv } => {
            commands::encrypt::encrypt(&text, &password, iv.as_deref())?;
        }
        Commands::Decrypt { text, password } => {
            commands::decrypt::decrypt(&text, &password)?;
        }
        Commands::Digest { text, utf16 } => {
            commands::digest::digest(&text, utf16)?;
        }
        Commands::Selftest => {
            commands::selftest::run()?;
        }
    }

    Ok(())
}
