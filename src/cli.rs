use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "rgrp")]
#[command(version)]
#[command(about = "Extract a file from a Build engine GRP archive", long_about = None)]
#[command(after_help = "Examples:\n  \
  rgrp E1L1.MAP                  extract E1L1.MAP from DUKE3D.GRP\n  \
  rgrp -f SW.GRP gotham.mid      extract from another archive\n  \
  rgrp -p game.con | less        send a file to stdout")]
pub struct Cli {
    /// File to extract (case-insensitive)
    #[arg(value_name = "NAME")]
    pub name: String,

    /// GRP archive to read
    #[arg(short = 'f', long = "file", value_name = "GRP", env = "RGRP_FILE", default_value = "DUKE3D.GRP")]
    pub file: PathBuf,

    /// Extract into exdir
    #[arg(short = 'd', value_name = "DIR")]
    pub extract_dir: Option<PathBuf>,

    /// Extract file to pipe, no messages
    #[arg(short = 'p')]
    pub pipe: bool,

    /// Verbose diagnostics (-vv => trace)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode, errors only
    #[arg(short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn is_quiet(&self) -> bool {
        self.quiet || self.pipe
    }

    /// Maximum level for the log subscriber
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 if self.is_quiet() => Level::ERROR,
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Where the extracted file goes; named after the member as requested
    pub fn output_path(&self) -> PathBuf {
        match &self.extract_dir {
            Some(dir) => dir.join(&self.name),
            None => PathBuf::from(&self.name),
        }
    }
}
