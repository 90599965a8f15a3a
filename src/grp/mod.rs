//! GRP archive parsing and extraction.
//!
//! GRP is the container used by Build engine games (Duke Nukem 3D, Shadow
//! Warrior, Blood). Its layout is flat and little-endian:
//!
//! 1. 12-byte signature `KenSilverman`
//! 2. u32 number of files
//! 3. per file: 12-byte NUL padded name and u32 length
//! 4. the file contents, concatenated in table order
//!
//! ## Architecture
//!
//! - [`structures`]: header, table record and directory entry types, name keys
//! - [`parser`]: reads the directory into a [`GrpIndex`]
//! - [`extractor`]: [`GrpExtractor`] owns the source and copies payloads out
//!
//! Names are matched without regard to ASCII case. Each entry carries a key
//! from a 65599 rolling hash of its upper-cased name; lookups compare keys
//! first and confirm with a full name comparison.

mod error;
mod extractor;
mod parser;
mod structures;

pub use error::{GrpError, GrpResult};
pub use extractor::GrpExtractor;
pub use parser::GrpIndex;
pub use structures::*;
