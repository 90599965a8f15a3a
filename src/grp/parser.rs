//! GRP directory parser.
//!
//! The whole directory sits at the front of the archive: a 16-byte header,
//! then one 16-byte record per member. Payload offsets are not stored; they
//! follow from the table size plus the running sum of preceding sizes, so the
//! table is always walked in file order.

use std::io::{self, Cursor, ErrorKind};

use tracing::{debug, trace};

use crate::io::ReadAt;

use super::error::{GrpError, GrpResult};
use super::structures::*;

/// In-memory directory of a GRP archive.
///
/// Built once by [`GrpIndex::parse`] and never modified afterwards.
#[derive(Debug, Clone)]
pub struct GrpIndex {
    entries: Vec<DirectoryEntry>,
}

impl GrpIndex {
    /// Read the header and entry table from `reader`.
    ///
    /// # Errors
    ///
    /// - [`GrpError::Format`] if the signature does not match (nothing past
    ///   the signature is read in that case) or the declared table does not
    ///   fit in the source
    /// - [`GrpError::Resource`] if the directory cannot be allocated
    /// - [`GrpError::Io`] if the source cannot be read
    pub fn parse<R: ReadAt + ?Sized>(reader: &R) -> GrpResult<Self> {
        let mut sig = [0u8; 12];
        reader
            .read_exact_at(0, &mut sig)
            .map_err(|e| short_header(e, "file too short for a signature"))?;
        GrpHeader::check_signature(&sig)?;

        let mut header_buf = [0u8; GrpHeader::SIZE];
        header_buf[..12].copy_from_slice(&sig);
        reader
            .read_exact_at(12, &mut header_buf[12..])
            .map_err(|e| short_header(e, "truncated header"))?;
        let header = GrpHeader::from_bytes(&header_buf)?;

        let count = header.entry_count;
        let table_len = TableRecord::SIZE as u64 * u64::from(count);
        let available = reader.size().saturating_sub(GrpHeader::SIZE as u64);
        if table_len > available {
            return Err(GrpError::Format(format!(
                "{count} entries need {table_len} table bytes, only {available} available"
            )));
        }
        debug!(entries = count, "reading GRP directory");

        let table_len = usize::try_from(table_len)
            .map_err(|_| GrpError::Resource(format!("{table_len} bytes")))?;
        let mut table = Vec::new();
        table
            .try_reserve_exact(table_len)
            .map_err(|_| GrpError::Resource(format!("{table_len} bytes")))?;
        table.resize(table_len, 0);
        reader.read_exact_at(GrpHeader::SIZE as u64, &mut table)?;

        let mut entries = Vec::new();
        entries
            .try_reserve_exact(count as usize)
            .map_err(|_| {
                GrpError::Resource(format!(
                    "{} bytes",
                    count as usize * std::mem::size_of::<DirectoryEntry>()
                ))
            })?;

        let mut cursor = Cursor::new(table.as_slice());
        let mut offset = header.data_offset();
        for i in 0..count {
            let record = TableRecord::read_from(&mut cursor)?;
            let entry = DirectoryEntry::new(record.name, record.size, offset);
            offset += u64::from(record.size);
            debug!("[{}] = {} - {}", i, entry.key, entry.file_name());
            entries.push(entry);
        }
        trace!(end = offset, "directory parsed");

        Ok(Self { entries })
    }

    /// Index of the first entry whose name matches `name` without regard to case.
    ///
    /// Only the first 12 bytes of `name` (or up to a NUL) are significant.
    pub fn find(&self, name: &str) -> GrpResult<usize> {
        self.position(name.as_bytes())
            .ok_or_else(|| GrpError::NotFound(name.to_string()))
    }

    /// Like [`find`](Self::find), returning the entry itself.
    pub fn lookup(&self, name: &str) -> GrpResult<&DirectoryEntry> {
        self.find(name).map(|i| &self.entries[i])
    }

    fn position(&self, name: &[u8]) -> Option<usize> {
        let key = name_key(name);
        self.entries
            .iter()
            .position(|e| e.key == key && e.matches(name))
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&DirectoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Running out of bytes inside the header means the file is not a GRP;
/// any other read failure is passed through.
fn short_header(err: io::Error, reason: &str) -> GrpError {
    if err.kind() == ErrorKind::UnexpectedEof {
        GrpError::Format(reason.into())
    } else {
        GrpError::Io(err)
    }
}
