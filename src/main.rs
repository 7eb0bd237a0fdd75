//! kemviz - walk through a simulated Kyber KEM exchange
//!
//! Prints the key pair, the ciphertext, both shared secrets and the
//! statistics a chart front end would plot, as text or JSON.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use serde::Serialize;

use kemviz::analysis::sizes::{CIPHERTEXT_LABEL, SHARED_SECRET_LABEL};
use kemviz::config::ParameterSet;
use kemviz::params::{Demo, KemParams, Kyber512Sized};
use kemviz::{DemoConfig, DigestAlgorithm, Exchange, KeyPair, Session};

#[derive(Parser)]
#[command(name = "kemviz")]
#[command(version)]
#[command(about = "Simulated Kyber KEM exchange with shared-secret statistics (not a real KEM)")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Override the shared-secret digest (sha256, sha3-256)
    #[arg(long, global = true)]
    digest: Option<DigestAlgorithm>,

    /// Override the buffer sizes (demo, kyber512-sized)
    #[arg(long, global = true)]
    parameter_set: Option<ParameterSet>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new key pair and print it as hex
    Keygen,

    /// Encapsulate and decapsulate a message, then analyze the shared secret
    Exchange {
        /// Message to derive the shared secret from
        #[arg(short, long)]
        message: String,

        /// Hex public key from a previous `keygen` (requires --secret-key)
        #[arg(long, requires = "secret_key")]
        public_key: Option<String>,

        /// Hex secret key from a previous `keygen` (requires --public-key)
        #[arg(long, requires = "public_key")]
        secret_key: Option<String>,
    },
}

#[derive(Serialize)]
struct KeygenOutput {
    public_key: String,
    secret_key: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter.as_str()))
        .format_timestamp_secs()
        .init();
    debug!("Using config: {:?}", config);

    match config.parameter_set {
        ParameterSet::Demo => run::<Demo>(&cli, &config),
        ParameterSet::Kyber512Sized => run::<Kyber512Sized>(&cli, &config),
    }
}

/// Loads the config file, if any, then applies command-line overrides.
fn resolve_config(cli: &Cli) -> Result<DemoConfig> {
    let mut config = match &cli.config {
        Some(path) => DemoConfig::from_path(path).with_context(|| format!("Failed to load config {}", path.display()))?,
        None => DemoConfig::default(),
    };
    if let Some(digest) = cli.digest {
        config = config.with_digest(digest);
    }
    if let Some(parameter_set) = cli.parameter_set {
        config = config.with_parameter_set(parameter_set);
    }
    Ok(config)
}

fn run<P: KemParams>(cli: &Cli, config: &DemoConfig) -> Result<()> {
    match &cli.command {
        Commands::Keygen => {
            let mut session = Session::<P>::new(config.digest);
            let keypair = session.generate_keys().context("Key generation failed")?;
            print_keygen(keypair, cli.json)
        }
        Commands::Exchange { message, public_key, secret_key } => {
            let keys = public_key.as_deref().zip(secret_key.as_deref());
            let exchange = exchange_once::<P>(config, message, keys)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&exchange)?);
            } else {
                print_exchange(&exchange, config.ciphertext_preview_chars);
            }
            Ok(())
        }
    }
}

/// Runs one exchange, reusing `keys` (public, secret hex) when given.
fn exchange_once<P: KemParams>(config: &DemoConfig, message: &str, keys: Option<(&str, &str)>) -> Result<Exchange> {
    let session = match keys {
        Some((pk_hex, sk_hex)) => {
            let keypair = KeyPair::from_hex::<P>(pk_hex, sk_hex).context("Invalid key pair")?;
            Session::<P>::with_keypair(config.digest, keypair)
        }
        None => {
            let mut session = Session::<P>::new(config.digest);
            session.generate_keys().context("Key generation failed")?;
            session
        }
    };

    match session.exchange(message)? {
        Some(exchange) => Ok(exchange),
        None => bail!("Message must not be empty"),
    }
}

fn print_keygen(keypair: &KeyPair, json: bool) -> Result<()> {
    if json {
        let output = KeygenOutput {
            public_key: keypair.public_key().to_hex(),
            secret_key: keypair.secret_key().to_hex(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Public Key: {}", keypair.public_key().to_hex());
        println!("Secret Key: {}", keypair.secret_key().to_hex());
    }
    Ok(())
}

fn print_exchange(exchange: &Exchange, preview_chars: usize) {
    let analysis = &exchange.analysis;

    println!("Public Key: {}", exchange.public_key.to_hex());
    println!("Ciphertext (truncated): {}", exchange.ciphertext_preview(preview_chars));
    println!("Shared Secret (Sender): {}", exchange.sender_secret);
    println!("Shared Secret (Receiver): {}", exchange.receiver_secret);
    if exchange.secrets_match {
        println!("Shared secrets match!");
    } else {
        println!("Shared secrets do not match!");
    }

    println!();
    println!("Entropy: {:.2} bits per char", analysis.entropy);

    println!();
    println!("Heatmap:");
    for row in analysis.heatmap.rows() {
        let cells: Vec<String> = row.iter().map(|v| format!("{:>2}", v)).collect();
        println!("  {}", cells.join(" "));
    }

    println!();
    let (ct_share, ss_share) = analysis.sizes.percentages();
    println!("Size comparison:");
    println!("  {}: {} bytes ({:.1}%)", CIPHERTEXT_LABEL, analysis.sizes.ciphertext_bytes, ct_share);
    println!("  {}: {} bytes ({:.1}%)", SHARED_SECRET_LABEL, analysis.sizes.shared_secret_bytes, ss_share);

    println!();
    println!("Byte triplets:");
    for t in &analysis.triplets {
        println!("  ({:>3}, {:>3}, {:>3})", t.x, t.y, t.z);
    }

    println!();
    println!("Nibble frequencies:");
    for entry in analysis.frequencies.entries() {
        println!("  {:>2}: {}", entry.value, "#".repeat(entry.count));
    }
}
