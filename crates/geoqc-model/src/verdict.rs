use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder for the found field name, type and length of a column whose
/// field is absent from the attribute table.
pub const NOT_FOUND: &str = "not found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationStatus {
    Normal,
    Error,
}

impl ValidationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationStatus::Normal => "Normal",
            ValidationStatus::Error => "Error",
        }
    }

    pub fn is_normal(&self) -> bool {
        matches!(self, ValidationStatus::Normal)
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict for one standard column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnValidationResult {
    pub std_column_id: String,
    pub std_column_name: String,
    pub std_type: String,
    pub std_length: String,
    pub found_field_name: String,
    pub field_found: bool,
    pub cur_type: String,
    pub cur_length: String,
    pub type_correct: bool,
    pub length_correct: bool,
    pub status: ValidationStatus,
}

impl ColumnValidationResult {
    pub fn is_normal(&self) -> bool {
        self.status.is_normal()
    }

    /// Short explanation of why the row failed, `None` for normal rows.
    pub fn remarks(&self) -> Option<&'static str> {
        if !self.field_found {
            Some("field not found")
        } else if !self.type_correct {
            Some("type mismatch")
        } else if !self.length_correct {
            Some("length mismatch")
        } else {
            None
        }
    }
}
