mod cli;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Format};
use projscan::{RealFileSystem, ScanError, render};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PROJSCAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("projscan: {err:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let raw_root = cli.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let root = std::fs::canonicalize(&raw_root).map_err(|err| ScanError::io(&raw_root, err))?;

    let options = cli.scan_options();
    // No issue detector runs here, so `issues` stays at zero.
    let report = projscan::scan(&RealFileSystem, &root, &options).await?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        Format::Json => {
            if cli.compact {
                serde_json::to_writer(&mut out, &report)?;
            } else {
                serde_json::to_writer_pretty(&mut out, &report)?;
            }
            writeln!(out)?;
        }
        Format::Tree => {
            writeln!(out, "{}", root.display())?;
            render::write_tree(&mut out, &report.tree)?;
            render::write_summary(&mut out, &report.stats)?;
        }
    }
    out.flush().context("failed to write output")?;
    Ok(())
}
