//! dBASE table header and field descriptor parsing.
//!
//! # Table Header (32 bytes, little-endian)
//!
//! | Offset | Field         | Type   | Description                       |
//! |--------|---------------|--------|-----------------------------------|
//! | 0      | version       | byte   | File type / version flags         |
//! | 1-3    | last update   | YYMMDD | Year since 1900, month, day       |
//! | 4-7    | record count  | u32    | Number of records                 |
//! | 8-9    | header length | u16    | Bytes before the first record     |
//! | 10-11  | record length | u16    | Bytes per record, including flag  |
//! | 12-31  | reserved      |        |                                   |
//!
//! # Field Descriptor (32 bytes each, terminated by 0x0D)
//!
//! | Offset | Field    | Type     | Description               |
//! |--------|----------|----------|---------------------------|
//! | 0-10   | name     | char[11] | NUL padded                |
//! | 11     | type     | char     | Native type code          |
//! | 16     | length   | byte     | Field width               |
//! | 17     | decimals | byte     | Decimal count             |

use chrono::NaiveDate;
use tracing::warn;

use geoqc_model::{AttributeSchema, FieldInfo, RuntimeCategory};

use crate::error::{DbfError, Result};

/// Length of the fixed table header.
pub const HEADER_LEN: usize = 32;

/// Length of one field descriptor.
pub const DESCRIPTOR_LEN: usize = 32;

/// Byte ending the field descriptor array.
pub const TERMINATOR: u8 = 0x0D;

/// Length of the NUL padded field name.
const NAME_LEN: usize = 11;

/// Map a native dBASE type code to its runtime category.
pub fn native_category(type_code: char) -> RuntimeCategory {
    match type_code.to_ascii_uppercase() {
        'C' => RuntimeCategory::Character,
        'N' | 'F' | 'I' | 'O' | 'Y' => RuntimeCategory::Numeric,
        'D' | 'T' | '@' => RuntimeCategory::Date,
        'L' => RuntimeCategory::Logical,
        _ => RuntimeCategory::Unknown,
    }
}

/// One field descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbfField {
    pub name: String,
    pub type_code: char,
    pub length: u8,
    pub decimal_count: u8,
}

impl DbfField {
    pub fn category(&self) -> RuntimeCategory {
        native_category(self.type_code)
    }

    pub fn info(&self) -> FieldInfo {
        FieldInfo::new(
            self.category(),
            u32::from(self.length),
            u32::from(self.decimal_count),
        )
    }
}

/// Parsed table header with its field descriptors in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbfHeader {
    pub version: u8,
    pub last_update: Option<NaiveDate>,
    pub record_count: u32,
    pub header_length: u16,
    pub record_length: u16,
    pub fields: Vec<DbfField>,
}

impl DbfHeader {
    /// Attribute schema keyed by field name.
    ///
    /// When two descriptors share a name (ignoring case) the first one wins.
    pub fn attribute_schema(&self) -> AttributeSchema {
        let mut schema = AttributeSchema::new();
        for field in &self.fields {
            if !schema.insert(field.name.clone(), field.info()) {
                warn!(field = %field.name, "duplicate field name, keeping the first descriptor");
            }
        }
        schema
    }
}

/// Parse the table header and field descriptors.
///
/// `data` must start at the beginning of the file; bytes after the
/// terminator are ignored.
pub fn parse_header(data: &[u8]) -> Result<DbfHeader> {
    let header = read_block(data, 0, HEADER_LEN)?;
    let header_length = read_u16(header, 8);
    if usize::from(header_length) <= HEADER_LEN {
        return Err(DbfError::invalid_format(format!(
            "header length {header_length} leaves no room for field descriptors"
        )));
    }

    let mut fields = Vec::new();
    let mut offset = HEADER_LEN;
    loop {
        match data.get(offset) {
            None => return Err(DbfError::MissingTerminator),
            Some(&TERMINATOR) => break,
            Some(_) => {}
        }
        let descriptor = read_block(data, offset, DESCRIPTOR_LEN)?;
        let field = parse_descriptor(descriptor, fields.len())?;
        fields.push(field);
        offset += DESCRIPTOR_LEN;
    }

    Ok(DbfHeader {
        version: header[0],
        last_update: parse_last_update(&header[1..4]),
        record_count: read_u32(header, 4),
        header_length,
        record_length: read_u16(header, 10),
        fields,
    })
}

fn parse_descriptor(data: &[u8], index: usize) -> Result<DbfField> {
    let name = read_name(&data[..NAME_LEN]);
    if name.is_empty() {
        return Err(DbfError::invalid_format(format!(
            "field descriptor {index} has an empty name"
        )));
    }
    Ok(DbfField {
        name,
        type_code: char::from(data[11]),
        length: data[16],
        decimal_count: data[17],
    })
}

fn parse_last_update(data: &[u8]) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(
        1900 + i32::from(data[0]),
        u32::from(data[1]),
        u32::from(data[2]),
    )
}

/// Read a block of bytes.
fn read_block(data: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    data.get(offset..offset + len)
        .ok_or(DbfError::TruncatedHeader {
            expected: offset + len,
            actual: data.len(),
        })
}

/// Read a little-endian u16 from data.
fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

/// Read a little-endian u32 from data.
fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// Read a NUL padded name, trimming surrounding spaces.
fn read_name(data: &[u8]) -> String {
    let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
    String::from_utf8_lossy(&data[..end]).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str, type_code: u8, length: u8, decimals: u8) -> [u8; DESCRIPTOR_LEN] {
        let mut buf = [0u8; DESCRIPTOR_LEN];
        buf[..name.len()].copy_from_slice(name.as_bytes());
        buf[11] = type_code;
        buf[16] = length;
        buf[17] = decimals;
        buf
    }

    fn header_bytes(descriptors: &[[u8; DESCRIPTOR_LEN]]) -> Vec<u8> {
        let header_length = (HEADER_LEN + descriptors.len() * DESCRIPTOR_LEN + 1) as u16;
        let mut data = vec![0u8; HEADER_LEN];
        data[0] = 0x03;
        data[1] = 125;
        data[2] = 3;
        data[3] = 1;
        data[4..8].copy_from_slice(&42u32.to_le_bytes());
        data[8..10].copy_from_slice(&header_length.to_le_bytes());
        data[10..12].copy_from_slice(&60u16.to_le_bytes());
        for descriptor in descriptors {
            data.extend_from_slice(descriptor);
        }
        data.push(TERMINATOR);
        data
    }

    #[test]
    fn parses_fields_in_order() {
        let data = header_bytes(&[
            descriptor("NAME", b'C', 50, 0),
            descriptor("AREA", b'N', 9, 2),
        ]);
        let header = parse_header(&data).expect("parse");
        assert_eq!(header.record_count, 42);
        assert_eq!(header.record_length, 60);
        assert_eq!(header.last_update, NaiveDate::from_ymd_opt(2025, 3, 1));
        assert_eq!(header.fields.len(), 2);
        assert_eq!(header.fields[0].name, "NAME");
        assert_eq!(header.fields[1].info(), FieldInfo::numeric(9, 2));
    }

    #[test]
    fn missing_terminator_is_reported() {
        let mut data = header_bytes(&[descriptor("NAME", b'C', 50, 0)]);
        data.pop();
        assert!(matches!(
            parse_header(&data),
            Err(DbfError::MissingTerminator)
        ));
    }

    #[test]
    fn partial_descriptor_is_truncated() {
        let mut data = header_bytes(&[descriptor("NAME", b'C', 50, 0)]);
        data.truncate(HEADER_LEN + 10);
        assert!(matches!(
            parse_header(&data),
            Err(DbfError::TruncatedHeader { .. })
        ));
    }

    #[test]
    fn native_types_map_to_categories() {
        assert_eq!(native_category('C'), RuntimeCategory::Character);
        assert_eq!(native_category('f'), RuntimeCategory::Numeric);
        assert_eq!(native_category('@'), RuntimeCategory::Date);
        assert_eq!(native_category('L'), RuntimeCategory::Logical);
        assert_eq!(native_category('M'), RuntimeCategory::Unknown);
    }
}
