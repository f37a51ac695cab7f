//! CBD Vector Generator CLI
//!
//! Writes `cbd_eta{eta}_rand.hex` and `cbd_eta{eta}_coeffs.hex` for each
//! configured eta value.

use cbd_vectors::{config::FileConfig, vectors};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

/// Generate CBD sampler verification vectors.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Output directory for generated files.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Number of coefficients to generate per eta.
    #[arg(long, allow_negative_numbers = true)]
    coeff_count: Option<i64>,

    /// Base random seed; each case uses seed + eta.
    #[arg(long)]
    seed: Option<u64>,

    /// Eta value to generate (repeatable).
    #[arg(long = "eta")]
    etas: Vec<usize>,

    /// TOML configuration file; flags given here take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read the written files back and verify them.
    #[arg(long)]
    self_check: bool,
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };

    if let Some(dir) = cli.output {
        config.output.dir = dir;
    }
    if let Some(count) = cli.coeff_count {
        config.generation.coeff_count = count;
    }
    if let Some(seed) = cli.seed {
        config.generation.seed = seed;
    }
    if !cli.etas.is_empty() {
        config.generation.etas = cli.etas;
    }

    info!(
        output = %config.output.dir.display(),
        coeff_count = config.generation.coeff_count,
        seed = config.generation.seed,
        etas = ?config.generation.etas,
        "Generating CBD vectors"
    );

    let written = vectors::generate_all(&config.output.dir, &config.generation, cli.self_check)?;

    info!("Done. Wrote {} cases", written.len());
    Ok(())
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("CBD Vector Generator v{}", cbd_vectors::VERSION);

    if let Err(e) = run(Cli::parse()) {
        error!("Generation failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
