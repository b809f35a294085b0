use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wordlist_csv::{convert, ConvertConfig, DEFAULT_INPUT, DEFAULT_LANGUAGE, DEFAULT_OUTPUT};

#[derive(Parser)]
#[command(
    name = "wordlist-csv",
    version,
    about = "Tag every word of a word list with a random UUID and a language code, as CSV"
)]
struct Cli {
    /// Word list, one word per line
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// CSV file to create or overwrite
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Language code written into every row
    #[arg(default_value = DEFAULT_LANGUAGE)]
    language: String,
}

impl From<Cli> for ConvertConfig {
    fn from(cli: Cli) -> Self {
        ConvertConfig::new(cli.input, cli.output, cli.language)
    }
}

fn main() -> ExitCode {
    if let Err(e) = init_tracing() {
        eprintln!("failed to initialise logging: {e}");
    }

    let config = ConvertConfig::from(Cli::parse());
    debug!(?config, "starting conversion");

    if convert(&config) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

const DEFAULT_LOG_FILTER: &str = "wordlist_csv=info";

/// `RUST_LOG` wins when set and valid; otherwise the crate logs at info.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter())
        .try_init()
}
