use byteorder::{LittleEndian, ReadBytesExt};
use std::io::{Cursor, Read};

use super::error::{GrpError, GrpResult};

/// Length of a member name field in the entry table
pub const NAME_LEN: usize = 12;

/// Archive header: signature followed by the file count - 16 bytes
pub struct GrpHeader {
    pub signature: [u8; 12],
    pub entry_count: u32,
}

impl GrpHeader {
    pub const SIGNATURE: &'static [u8; 12] = b"KenSilverman";
    pub const SIZE: usize = 16;

    /// Check the signature only; compared without regard to case
    pub fn check_signature(data: &[u8]) -> GrpResult<()> {
        if data.len() < Self::SIGNATURE.len()
            || !data[..Self::SIGNATURE.len()].eq_ignore_ascii_case(Self::SIGNATURE)
        {
            return Err(GrpError::Format("signature mismatch".into()));
        }
        Ok(())
    }

    pub fn from_bytes(data: &[u8]) -> GrpResult<Self> {
        Self::check_signature(data)?;
        if data.len() < Self::SIZE {
            return Err(GrpError::Format("truncated header".into()));
        }

        let mut cursor = Cursor::new(data);
        let mut signature = [0u8; 12];
        cursor.read_exact(&mut signature)?;

        Ok(Self {
            signature,
            entry_count: cursor.read_u32::<LittleEndian>()?,
        })
    }

    /// Offset of the first payload byte
    pub fn data_offset(&self) -> u64 {
        Self::SIZE as u64 + TableRecord::SIZE as u64 * u64::from(self.entry_count)
    }
}

/// One raw record of the entry table - 16 bytes
pub struct TableRecord {
    pub name: [u8; NAME_LEN],
    pub size: u32,
}

impl TableRecord {
    pub const SIZE: usize = 16;

    pub fn read_from<R: Read>(reader: &mut R) -> GrpResult<Self> {
        let mut name = [0u8; NAME_LEN];
        reader.read_exact(&mut name)?;
        let size = reader.read_u32::<LittleEndian>()?;
        Ok(Self { name, size })
    }
}

/// Parsed GRP directory entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Raw name field, NUL padded; bytes after the first NUL are kept but ignored
    pub name: [u8; NAME_LEN],
    pub size: u32,
    /// Absolute position of the payload, computed from the table
    pub offset: u64,
    /// Fast-reject key, see [`name_key`]
    pub key: u32,
}

impl DirectoryEntry {
    pub fn new(name: [u8; NAME_LEN], size: u32, offset: u64) -> Self {
        Self {
            name,
            size,
            offset,
            key: name_key(&name),
        }
    }

    /// Significant name bytes (up to the first NUL)
    pub fn name_bytes(&self) -> &[u8] {
        significant(&self.name)
    }

    /// Name for display, lossily decoded
    pub fn file_name(&self) -> String {
        String::from_utf8_lossy(self.name_bytes()).into_owned()
    }

    /// Case-insensitive comparison against a query name
    pub fn matches(&self, query: &[u8]) -> bool {
        self.name_bytes().eq_ignore_ascii_case(significant(query))
    }

    /// One past the last payload byte
    pub fn end(&self) -> u64 {
        self.offset + u64::from(self.size)
    }
}

/// Bytes of a name that take part in hashing and comparison:
/// everything before the first NUL, at most [`NAME_LEN`] bytes.
pub fn significant(name: &[u8]) -> &[u8] {
    let name = &name[..name.len().min(NAME_LEN)];
    match name.iter().position(|&c| c == 0) {
        Some(nul) => &name[..nul],
        None => name,
    }
}

/// The classic rolling hash (`acc * 65599 + c`) over a NUL terminated string.
///
/// Case sensitive and not length limited.
pub fn raw_name_hash(name: &[u8]) -> u32 {
    name.iter()
        .take_while(|&&c| c != 0)
        .fold(0u32, |hash, &c| step(hash, c))
}

/// Lookup key for a member name.
///
/// Same recurrence as [`raw_name_hash`], but over the [`significant`] bytes
/// folded to upper case, so names that compare equal always share a key.
pub fn name_key(name: &[u8]) -> u32 {
    significant(name)
        .iter()
        .fold(0u32, |hash, &c| step(hash, c.to_ascii_uppercase()))
}

fn step(hash: u32, c: u8) -> u32 {
    u32::from(c)
        .wrapping_add(hash << 6)
        .wrapping_add(hash << 16)
        .wrapping_sub(hash)
}
