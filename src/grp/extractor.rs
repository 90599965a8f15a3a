use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::io::{LocalFileReader, ReadAt};

use super::error::{GrpError, GrpResult};
use super::parser::GrpIndex;
use super::structures::DirectoryEntry;

/// An open GRP archive: the byte source plus its parsed directory
pub struct GrpExtractor<R: ReadAt> {
    reader: R,
    index: GrpIndex,
}

impl GrpExtractor<LocalFileReader> {
    /// Open an archive on disk and read its directory
    pub fn open_path(path: &Path) -> GrpResult<Self> {
        let reader = LocalFileReader::new(path).map_err(|source| GrpError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::open(reader)
    }
}

impl<R: ReadAt> GrpExtractor<R> {
    pub fn open(reader: R) -> GrpResult<Self> {
        let index = GrpIndex::parse(&reader)?;
        Ok(Self { reader, index })
    }

    pub fn index(&self) -> &GrpIndex {
        &self.index
    }

    /// List all entries in the archive
    pub fn entries(&self) -> &[DirectoryEntry] {
        self.index.entries()
    }

    /// Find an entry by name, ignoring case
    pub fn find(&self, name: &str) -> GrpResult<&DirectoryEntry> {
        self.index.lookup(name)
    }

    /// Extract file data to memory
    pub fn extract_to_memory(&self, entry: &DirectoryEntry) -> GrpResult<Vec<u8>> {
        if entry.size == 0 {
            return Ok(Vec::new());
        }

        if entry.end() > self.reader.size() {
            return Err(GrpError::Io(io::Error::new(
                ErrorKind::UnexpectedEof,
                format!(
                    "'{}' spans bytes {}..{} but the archive is {} bytes long",
                    entry.file_name(),
                    entry.offset,
                    entry.end(),
                    self.reader.size()
                ),
            )));
        }

        let len = entry.size as usize;
        let mut buf = Vec::new();
        buf.try_reserve_exact(len)
            .map_err(|_| GrpError::Resource(format!("{len} bytes")))?;
        buf.resize(len, 0);

        debug!(name = %entry.file_name(), offset = entry.offset, size = entry.size, "reading payload");
        self.reader.read_exact_at(entry.offset, &mut buf)?;

        Ok(buf)
    }

    /// Copy file data into any writer
    pub fn extract_to_writer<W: Write>(&self, entry: &DirectoryEntry, writer: &mut W) -> GrpResult<()> {
        let data = self.extract_to_memory(entry)?;
        writer.write_all(&data)?;
        writer.flush()?;
        Ok(())
    }

    /// Extract file to disk, replacing anything already at `output_path`.
    ///
    /// The payload is read before the output is created; if writing fails the
    /// partial output is removed.
    pub fn extract_to_file(&self, entry: &DirectoryEntry, output_path: &Path) -> GrpResult<()> {
        let data = self.extract_to_memory(entry)?;

        let mut file = fs::File::create(output_path)?;
        let result = file.write_all(&data).and_then(|()| file.sync_all());

        if let Err(e) = result {
            drop(file);
            if let Err(rm) = fs::remove_file(output_path) {
                warn!(path = %output_path.display(), error = %rm, "could not remove partial output");
            }
            return Err(e.into());
        }

        Ok(())
    }

    /// Extract file to stdout
    pub fn extract_to_stdout(&self, entry: &DirectoryEntry) -> GrpResult<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.extract_to_writer(entry, &mut lock)
    }
}
