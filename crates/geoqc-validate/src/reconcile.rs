//! Type and length reconciliation between a declared standard type and an
//! actual attribute field.

use geoqc_model::{FieldInfo, FieldLength, RuntimeCategory, StandardType};

/// Whether a runtime category satisfies the declared standard type.
///
/// `VARCHAR2` only accepts `Character` and `NUMBER` only accepts `Numeric`.
/// Any other declared type only accepts the category with the same name,
/// ignoring case. There is no other coercion.
pub fn type_correct(std_type: &StandardType, category: RuntimeCategory) -> bool {
    match std_type {
        StandardType::Varchar2 => category == RuntimeCategory::Character,
        StandardType::Number => category == RuntimeCategory::Numeric,
        StandardType::Other(name) => name.eq_ignore_ascii_case(category.as_str()),
    }
}

/// Whether the actual length satisfies the declared length.
///
/// Only meaningful once the type matched: callers must not ask about length
/// for a field whose type is wrong (see [`reconcile`]).
pub fn length_correct(
    std_type: &StandardType,
    declared: FieldLength,
    field: &FieldInfo,
) -> bool {
    match std_type {
        StandardType::Varchar2 => declared.precision == field.length,
        StandardType::Number => {
            declared.precision == field.length && declared.scale == field.decimal_count
        }
        StandardType::Other(_) => true,
    }
}

/// Outcome of comparing one declared column against one actual field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciliation {
    pub type_correct: bool,
    pub length_correct: bool,
}

impl Reconciliation {
    pub fn is_normal(&self) -> bool {
        self.type_correct && self.length_correct
    }
}

/// Apply the type rule, then the length rule when the type matched.
/// A wrong type always yields a wrong length.
pub fn reconcile(
    std_type: &StandardType,
    declared: FieldLength,
    field: &FieldInfo,
) -> Reconciliation {
    let type_correct = type_correct(std_type, field.category);
    let length_correct = type_correct && length_correct(std_type, declared, field);
    Reconciliation {
        type_correct,
        length_correct,
    }
}
