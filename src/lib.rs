//! # rgrp
//!
//! Extract single files from Build engine GRP archives.
//!
//! A GRP archive starts with the signature `KenSilverman`, a file count and a
//! table of 12-byte names with their lengths; the file contents follow back to
//! back. This crate reads that directory, looks members up by name (ignoring
//! case) and copies their bytes out.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use rgrp::GrpExtractor;
//!
//! fn main() -> anyhow::Result<()> {
//!     let grp = GrpExtractor::open_path(Path::new("DUKE3D.GRP"))?;
//!
//!     for entry in grp.entries() {
//!         println!("{:>10}  {}", entry.size, entry.file_name());
//!     }
//!
//!     let map = grp.find("e1l1.map")?;
//!     grp.extract_to_file(map, Path::new("E1L1.MAP"))?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod grp;
pub mod io;

pub use cli::Cli;
pub use grp::{DirectoryEntry, GrpError, GrpExtractor, GrpIndex, GrpResult};
pub use io::{LocalFileReader, ReadAt};
