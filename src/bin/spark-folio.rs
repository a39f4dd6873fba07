//! Terminal typewriter for the portfolio hero line.
//!
//! ```text
//! spark-folio --config folio.toml --prefix "I'm a "
//! spark-folio --words Rustacean --words Builder
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spark_folio::config::FolioConfig;
use spark_folio::terminal::run_typewriter;

#[derive(Debug, Parser)]
#[command(name = "spark-folio", version, about = "Typewriter effect in your terminal")]
struct Cli {
    /// TOML config file; defaults apply when omitted.
    #[arg(short, long, env = "SPARK_FOLIO_CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured words (repeatable).
    #[arg(short, long = "words")]
    words: Vec<String>,

    /// Static text drawn before the typed word.
    #[arg(short, long, default_value = "I'm a ")]
    prefix: String,
}

fn main() -> Result<()> {
    // Logs go to stderr so they do not fight the typewriter line.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => FolioConfig::load(path)?,
        None => FolioConfig::default(),
    };
    if !cli.words.is_empty() {
        config.typewriter.words = cli.words;
    }

    let cycler = config
        .typewriter
        .build()
        .context("invalid typewriter configuration")?;

    tracing::info!(words = cycler.words().len(), "starting typewriter");
    run_typewriter(cycler, &cli.prefix).context("terminal error")?;
    Ok(())
}
