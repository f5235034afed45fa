use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use cbr_core::{logging, ClientConfig, ExchangeRateClient};
use clap::Parser;

/// Print the CBR exchange rates archived for a date.
#[derive(Parser, Debug)]
#[command(name = "cbr-rates", version)]
struct Cli {
    /// Archive date, YYYY-MM-DD
    date: String,

    /// Archive root, overrides CBR_BASE_URL
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds, overrides CBR_TIMEOUT_SECS
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Write a timestamped session log into this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Reject dates that are not real calendar days before sending anything
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.log_dir {
        Some(dir) => {
            let path = logging::init_session_log(dir)
                .with_context(|| format!("setting up session log in {}", dir.display()))?;
            eprintln!("logging to {}", path.display());
        }
        None => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init(),
    }

    let config = ClientConfig::from_env()
        .context("reading client configuration")?
        .with_overrides(cli.base_url, cli.timeout_secs);

    let client = ExchangeRateClient::with_config(&config);
    let rates = if cli.strict {
        client.fetch_checked(&cli.date).ok()
    } else {
        client.fetch(&cli.date)
    };

    match rates {
        Some(payload) => {
            println!("{}", serde_json::to_string_pretty(&payload)?);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("No data for {}", cli.date);
            Ok(ExitCode::FAILURE)
        }
    }
}
