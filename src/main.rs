//! Main entry point for the rgrp CLI application.
//!
//! Opens a GRP archive, looks up the requested member and writes it next to
//! the caller (or to stdout with `-p`).

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use rgrp::{Cli, GrpError, GrpExtractor};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v/-q when set
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(cli.log_level()).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<GrpError>()
                .map_or(1, GrpError::exit_code);
            ExitCode::from(code)
        }
    }
}

/// Open the archive, find the member and extract it.
fn run(cli: &Cli) -> Result<()> {
    let grp = GrpExtractor::open_path(&cli.file)?;
    let entry = grp.find(&cli.name)?;

    if cli.pipe {
        return grp.extract_to_stdout(entry).map_err(Into::into);
    }

    let output_path = cli.output_path();

    if !cli.is_quiet() {
        println!("  extracting: {} ({} bytes)", entry.file_name(), entry.size);
    }

    grp.extract_to_file(entry, &output_path)
        .with_context(|| format!("writing {}", output_path.display()))?;

    Ok(())
}
