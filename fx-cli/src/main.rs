//! FX CLI
//!
//! Command-line interface converting an amount between currencies at the
//! daily reference rates.

mod rates;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fx_client::{DEFAULT_RATES_URL, EcbClient};
use fx_service::ConversionService;
use fx_types::{Amount, ConversionResponse, Currency, Decimal};

#[derive(Parser)]
#[command(name = "fx")]
#[command(author, version, about = "Convert money between currencies", long_about = None)]
struct Cli {
    /// Source currency code, e.g. USD
    #[arg(long)]
    from: String,

    /// Target currency code, e.g. EUR
    #[arg(long)]
    to: String,

    /// Amount to convert, e.g. 123.45
    #[arg(allow_negative_numbers = true)]
    amount: String,

    /// URL of the daily reference-rate feed
    #[arg(long, env = "FX_RATES_URL", default_value = DEFAULT_RATES_URL)]
    rates_url: String,

    /// Deadline for the feed request, in seconds
    #[arg(long, env = "FX_HTTP_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    /// Read rates from a saved feed document instead of the network
    #[arg(long)]
    rates_file: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

async fn run(cli: Cli) -> Result<String> {
    let source_currency = Currency::parse(&cli.from)
        .with_context(|| format!("unable to parse source currency {:?}", cli.from))?;

    let target_currency = Currency::parse(&cli.to)
        .with_context(|| format!("unable to parse target currency {:?}", cli.to))?;

    let quantity = Decimal::parse(&cli.amount)
        .with_context(|| format!("unable to parse value {:?}", cli.amount))?;

    let source = Amount::new(quantity, source_currency)?;

    let converted = match &cli.rates_file {
        Some(path) => {
            let table = rates::load_feed_file(path).await?;
            ConversionService::new(table)
                .convert(&source, &target_currency)
                .await
        }
        None => {
            let client = EcbClient::new(&cli.rates_url)
                .with_timeout(Duration::from_secs(cli.timeout_secs))?;
            ConversionService::new(client)
                .convert(&source, &target_currency)
                .await
        }
    }
    .context("failed to convert currency")?;

    if cli.json {
        let response = ConversionResponse::new(source, converted);
        Ok(serde_json::to_string_pretty(&response)?)
    } else {
        Ok(format!("{} = {}", source, converted))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    // Diagnostics go to stderr; stdout carries only the result.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{}", diagnostic(&e));
            std::process::exit(1);
        }
    }
}

/// Renders an error and its causes on one line, joined by `: `.
fn diagnostic(err: &anyhow::Error) -> String {
    format!("{err:#}")
}
