//! Attribute table reader.
//!
//! Only the header is read; records are never touched.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use geoqc_model::AttributeSchema;

use crate::error::{DbfError, Result};
use crate::header::{DbfHeader, HEADER_LEN, parse_header};

/// dBASE header reader.
pub struct DbfReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> DbfReader<R> {
    /// Create a new reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
        }
    }

    /// Read the table header and field descriptors.
    pub fn read_header(mut self) -> Result<DbfHeader> {
        let mut data = Vec::with_capacity(HEADER_LEN);
        self.reader
            .by_ref()
            .take(HEADER_LEN as u64)
            .read_to_end(&mut data)?;
        if data.len() < HEADER_LEN {
            return Err(DbfError::TruncatedHeader {
                expected: HEADER_LEN,
                actual: data.len(),
            });
        }

        let header_length = usize::from(u16::from_le_bytes([data[8], data[9]]));
        let remaining = header_length.saturating_sub(HEADER_LEN);
        self.reader
            .by_ref()
            .take(remaining as u64)
            .read_to_end(&mut data)?;
        parse_header(&data)
    }
}

impl DbfReader<File> {
    /// Open a `.dbf` file for reading.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DbfError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                DbfError::Io(e)
            }
        })?;
        Ok(Self::new(file))
    }
}

/// Attribute table belonging to `path`.
///
/// A `.dbf` path is used as is; for any other path (typically `.shp`) the
/// sibling table with the same base name is used.
pub fn dbf_path_for(path: &Path) -> PathBuf {
    let is_dbf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("dbf"));
    if is_dbf {
        return path.to_path_buf();
    }
    let lower = path.with_extension("dbf");
    if lower.exists() {
        return lower;
    }
    let upper = path.with_extension("DBF");
    if upper.exists() { upper } else { lower }
}

/// Read the header of the attribute table belonging to `path`.
pub fn read_header(path: &Path) -> Result<DbfHeader> {
    let dbf_path = dbf_path_for(path);
    let header = DbfReader::open(&dbf_path)?.read_header()?;
    debug!(
        path = %dbf_path.display(),
        fields = header.fields.len(),
        records = header.record_count,
        "read attribute table header"
    );
    Ok(header)
}

/// Read the attribute schema of a `.dbf` table or of a shapefile's table.
pub fn read_attribute_schema(path: &Path) -> Result<AttributeSchema> {
    Ok(read_header(path)?.attribute_schema())
}
