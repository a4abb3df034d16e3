//! Type enumerations for standard columns and actual attribute fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declared type of a standard column.
///
/// Standard tables carry free-form type names. Two of them have fixed
/// meaning and are resolved once, when the column is loaded; everything else
/// is kept verbatim and compared literally against the runtime category name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StandardType {
    /// `VARCHAR2`: character data, length is the field width.
    Varchar2,
    /// `NUMBER`: numeric data, length is precision and scale.
    Number,
    /// Any other declared type name, preserved as written.
    Other(String),
}

impl StandardType {
    pub const VARCHAR2: &'static str = "VARCHAR2";
    pub const NUMBER: &'static str = "NUMBER";

    /// Resolve a declared type name (case-insensitive).
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case(Self::VARCHAR2) {
            StandardType::Varchar2
        } else if trimmed.eq_ignore_ascii_case(Self::NUMBER) {
            StandardType::Number
        } else {
            StandardType::Other(trimmed.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StandardType::Varchar2 => Self::VARCHAR2,
            StandardType::Number => Self::NUMBER,
            StandardType::Other(name) => name,
        }
    }
}

impl fmt::Display for StandardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for StandardType {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for StandardType {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<StandardType> for String {
    fn from(value: StandardType) -> Self {
        match value {
            StandardType::Other(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

/// Runtime category of an attribute field, as reported by the file reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuntimeCategory {
    Character,
    Numeric,
    Date,
    Logical,
    Unknown,
}

impl RuntimeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuntimeCategory::Character => "Character",
            RuntimeCategory::Numeric => "Numeric",
            RuntimeCategory::Date => "Date",
            RuntimeCategory::Logical => "Logical",
            RuntimeCategory::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for RuntimeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuntimeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CHARACTER" => Ok(RuntimeCategory::Character),
            "NUMERIC" => Ok(RuntimeCategory::Numeric),
            "DATE" => Ok(RuntimeCategory::Date),
            "LOGICAL" => Ok(RuntimeCategory::Logical),
            "UNKNOWN" => Ok(RuntimeCategory::Unknown),
            _ => Err(format!("Unknown runtime category: {}", s)),
        }
    }
}
