//! Textual length codec.
//!
//! Standard tables declare lengths as `"50"` (character width or integer
//! precision) or `"9,2"` (precision and scale). Malformed text degrades to
//! `0,0`, which means "no length constraint" rather than an error.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared or actual field length as a (precision, scale) pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldLength {
    pub precision: u32,
    pub scale: u32,
}

impl FieldLength {
    pub const fn new(precision: u32, scale: u32) -> Self {
        Self { precision, scale }
    }

    /// Parse `"N"` or `"N,S"`. Never fails; anything unparsable yields `0,0`.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::default();
        }
        if trimmed.contains(',') {
            let parts: Vec<&str> = trimmed.split(',').collect();
            let [precision, scale] = parts.as_slice() else {
                return Self::default();
            };
            return match (parse_part(precision), parse_part(scale)) {
                (Some(precision), Some(scale)) => Self::new(precision, scale),
                _ => Self::default(),
            };
        }
        parse_part(trimmed)
            .map(|precision| Self::new(precision, 0))
            .unwrap_or_default()
    }

    /// Render back to text. A zero scale collapses to the bare precision.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.precision == 0 && self.scale == 0
    }
}

impl fmt::Display for FieldLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale > 0 {
            write!(f, "{},{}", self.precision, self.scale)
        } else {
            write!(f, "{}", self.precision)
        }
    }
}

impl From<(u32, u32)> for FieldLength {
    fn from((precision, scale): (u32, u32)) -> Self {
        Self::new(precision, scale)
    }
}

fn parse_part(part: &str) -> Option<u32> {
    part.trim().parse::<u32>().ok()
}
