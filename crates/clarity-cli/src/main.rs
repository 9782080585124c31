//! Clarity CLI
//!
//! CLI tool for rebuilding the precompiled hide rule artifact.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use clarity_compiler::RulePipeline;
use clarity_core::ClarityConfig;

#[derive(Parser)]
#[command(name = "clarity")]
#[command(about = "Clarity hide rule compiler")]
struct Cli {
    /// Directory holding the rule source, artifact and optional clarity.json
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Log filter, e.g. "debug" or "clarity_compiler=trace"
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild the precompiled artifact from the rule source
    Build,
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build => cmd_build(cli.root),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_build(root: PathBuf) -> Result<(), String> {
    let config = ClarityConfig::discover(root).map_err(|e| e.to_string())?;
    let pipeline = RulePipeline::new(config).map_err(|e| e.to_string())?;

    let report = pipeline.build().map_err(|e| e.to_string())?;
    log::debug!("build report: {report:?}");

    println!("Success: Built {}", report.artifact.display());
    println!("  Entries:  {}", report.entries);
    println!("  Output:   {} bytes", report.output_len);
    println!("  Artifact: {} bytes", report.bytes_written);

    Ok(())
}
