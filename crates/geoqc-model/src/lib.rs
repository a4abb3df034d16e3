//! Data model for GeoQC attribute-schema checks.
//!
//! Standard tables describe what a vector file's attribute table should look
//! like; an [`AttributeSchema`] describes what it actually contains. The
//! validation engine compares the two and emits one [`ColumnValidationResult`]
//! per expected column.

pub mod enums;
pub mod error;
pub mod length;
pub mod project;
pub mod schema;
pub mod table;
pub mod verdict;

pub use enums::{RuntimeCategory, StandardType};
pub use error::{ModelError, Result};
pub use length::FieldLength;
pub use project::{Category, DEFAULT_CATEGORY_NAME, ProjectDefinition};
pub use schema::{AttributeSchema, FieldInfo, SchemaField};
pub use table::{ColumnDefinition, TableDefinition};
pub use verdict::{ColumnValidationResult, NOT_FOUND, ValidationStatus};
