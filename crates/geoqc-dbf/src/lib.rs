//! dBASE attribute table header reader.
//!
//! Shapefiles keep their attributes in a sibling `.dbf` table. This crate
//! reads that table's header and field descriptors and turns them into an
//! [`AttributeSchema`](geoqc_model::AttributeSchema). Records are not read.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use geoqc_dbf::read_attribute_schema;
//!
//! let schema = read_attribute_schema(Path::new("parcel.shp")).unwrap();
//! for (name, info) in schema.iter() {
//!     println!("{name} {} {}", info.category, info.field_length());
//! }
//! ```

mod error;
pub mod header;
mod reader;

pub use error::{DbfError, Result};
pub use header::{DbfField, DbfHeader, native_category, parse_header};
pub use reader::{DbfReader, dbf_path_for, read_attribute_schema, read_header};
