//! blindpin entry point.
//!
//! # Usage
//!
//! ```bash
//! # Prompt with the default text
//! blindpin
//!
//! # Custom prompt, with logs appended to a file
//! blindpin --prompt "Trezor PIN:" --log-file /tmp/blindpin.log --log-level debug
//! ```

use std::{
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Mutex,
};

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Blind keypad PIN entry for hardware wallets
#[derive(Parser, Debug)]
#[command(name = "blindpin")]
#[command(about = "Enter a PIN on a blank keypad matching your device's scrambled layout")]
#[command(version)]
struct Args {
    /// Prompt shown above the keypad
    #[arg(short, long, default_value = "Enter PIN:")]
    prompt: String,

    /// Append logs to this file
    ///
    /// The UI owns the terminal, so nothing is logged unless a file is given.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(path) = &args.log_file
        && let Err(e) = init_logging(path, &args.log_level)
    {
        let _ = writeln!(io::stderr(), "failed to open log file {}: {e}", path.display());
        return ExitCode::FAILURE;
    }

    match blindpin_tui::enter(&args.prompt) {
        Ok(pin) => {
            let _ = writeln!(io::stdout().lock(), "Success! Scrambled PIN input: {}", pin.as_str());
            ExitCode::SUCCESS
        },
        Err(e) => {
            let _ = writeln!(io::stderr(), "{e}");
            ExitCode::FAILURE
        },
    }
}

fn init_logging(path: &Path, level: &str) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();

    tracing::debug!("logging to {}", path.display());
    Ok(())
}
