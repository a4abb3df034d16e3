//! Project store for GeoQC standard tables.
//!
//! Projects are saved as pretty-printed JSON (`.pgs` by convention). Column
//! lists can also be imported from tab-separated text copied from a
//! spreadsheet.

pub mod columns;
pub mod error;
pub mod store;

pub use crate::columns::{DEFAULT_COLUMN_LENGTH, parse_columns_tsv};
pub use crate::error::{Result, StandardsError};
pub use crate::store::{
    PROJECT_ENV_VAR, PROJECT_FILE_EXTENSION, create_project, load_project, project_path_from,
    resolve_project_path, save_project,
};
