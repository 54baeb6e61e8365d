//! # Mailscreen
//!
//! Screens email domains against a suspicious-domain list with a Bloom
//! filter and prints how it compares with an exact `HashSet`.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging (stderr, so the report stays clean on stdout)
//! 2. Load configuration: defaults, then environment, then flags
//! 3. Read both inputs and run the comparison
//! 4. Print the report as text or JSON

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use ms_01_probabilistic_set::IndexMode;
use ms_02_screening_harness::{run, HarnessConfig, OutputFormat};

/// Mailscreen: Bloom filter vs HashSet domain screening
#[derive(Parser, Debug)]
#[command(name = "mailscreen")]
#[command(about = "Screen email domains against a suspicious-domain list")]
struct Args {
    /// Newline-delimited suspicious domains
    #[arg(short, long)]
    suspicious: Option<PathBuf>,

    /// Newline-delimited email addresses
    #[arg(short, long)]
    emails: Option<PathBuf>,

    /// Filter size in bits
    #[arg(long)]
    bit_size: Option<i64>,

    /// Probes per element
    #[arg(long)]
    hash_count: Option<i64>,

    /// Probe index reduction: compatible or unsigned
    #[arg(long)]
    index_mode: Option<IndexMode>,

    /// Report format: text or json
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Command-line flags take precedence over everything else
    fn apply(self, mut config: HarnessConfig) -> HarnessConfig {
        if let Some(path) = self.suspicious {
            config.suspicious_path = path;
        }
        if let Some(path) = self.emails {
            config.emails_path = path;
        }
        if let Some(bit_size) = self.bit_size {
            config.filter.bit_size = bit_size;
        }
        if let Some(hash_count) = self.hash_count {
            config.filter.hash_count = hash_count;
        }
        if let Some(index_mode) = self.index_mode {
            config.filter.index_mode = index_mode;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration
    let config = args.apply(HarnessConfig::from_env());
    info!(
        suspicious = %config.suspicious_path.display(),
        emails = %config.emails_path.display(),
        bit_size = config.filter.bit_size,
        hash_count = config.filter.hash_count,
        index_mode = %config.filter.index_mode,
        "Starting screening run"
    );

    let report = run(&config).context("Screening run failed")?;
    println!("{}", report.render(config.format)?);
    if config.format == OutputFormat::Text {
        println!("\nDone.");
    }

    Ok(())
}
