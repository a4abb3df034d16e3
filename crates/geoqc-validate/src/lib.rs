//! Standard-versus-actual attribute schema validation.
//!
//! The engine is pure: no I/O and no shared state, so independent
//! (table, schema) pairs can be validated from any thread.

mod engine;
mod error;
mod matching;
pub mod reconcile;

pub use engine::{validate, validate_column};
pub use error::{Result, ValidationError};
pub use matching::{FileValidation, file_id, find_table_for_file, validate_file};
pub use reconcile::{Reconciliation, length_correct, reconcile, type_correct};
