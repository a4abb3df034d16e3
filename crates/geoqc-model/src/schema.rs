//! Actual attribute-table metadata of a loaded vector file.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::enums::RuntimeCategory;
use crate::length::FieldLength;

/// Metadata of one attribute field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub category: RuntimeCategory,
    pub length: u32,
    pub decimal_count: u32,
}

impl FieldInfo {
    pub fn new(category: RuntimeCategory, length: u32, decimal_count: u32) -> Self {
        Self {
            category,
            length,
            decimal_count,
        }
    }

    pub fn character(length: u32) -> Self {
        Self::new(RuntimeCategory::Character, length, 0)
    }

    pub fn numeric(length: u32, decimal_count: u32) -> Self {
        Self::new(RuntimeCategory::Numeric, length, decimal_count)
    }

    /// Actual length as a codec pair (`length`, `decimal_count`).
    pub fn field_length(&self) -> FieldLength {
        FieldLength::new(self.length, self.decimal_count)
    }
}

/// One named entry of an [`AttributeSchema`], as serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: String,
    #[serde(flatten)]
    pub info: FieldInfo,
}

/// Ordered field name -> [`FieldInfo`] mapping with case-insensitive lookup.
///
/// Field order and the original spelling of names are preserved. When two
/// names collide case-insensitively the first one is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<SchemaField>", into = "Vec<SchemaField>")]
pub struct AttributeSchema {
    fields: Vec<SchemaField>,
    index: HashMap<String, usize>,
}

impl AttributeSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field. Returns `false` if a field with the same name
    /// (ignoring case) is already present; the existing entry is kept.
    pub fn insert(&mut self, name: impl Into<String>, info: FieldInfo) -> bool {
        let name = name.into();
        let key = name.to_ascii_uppercase();
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.fields.len());
        self.fields.push(SchemaField { name, info });
        true
    }

    /// Look up a field by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&FieldInfo> {
        self.get_named(name).map(|(_, info)| info)
    }

    /// Look up a field and return its original spelling with its metadata.
    pub fn get_named(&self, name: &str) -> Option<(&str, &FieldInfo)> {
        self.index
            .get(&name.to_ascii_uppercase())
            .and_then(|idx| self.fields.get(*idx))
            .map(|field| (field.name.as_str(), &field.info))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&name.to_ascii_uppercase())
    }

    /// Fields in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldInfo)> {
        self.fields
            .iter()
            .map(|field| (field.name.as_str(), &field.info))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, FieldInfo)> for AttributeSchema {
    fn from_iter<I: IntoIterator<Item = (S, FieldInfo)>>(iter: I) -> Self {
        let mut schema = AttributeSchema::new();
        for (name, info) in iter {
            schema.insert(name, info);
        }
        schema
    }
}

impl From<Vec<SchemaField>> for AttributeSchema {
    fn from(fields: Vec<SchemaField>) -> Self {
        fields
            .into_iter()
            .map(|field| (field.name, field.info))
            .collect()
    }
}

impl From<AttributeSchema> for Vec<SchemaField> {
    fn from(schema: AttributeSchema) -> Self {
        schema.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let schema: AttributeSchema = [
            ("NAME", FieldInfo::character(50)),
            ("Area", FieldInfo::numeric(9, 2)),
        ]
        .into_iter()
        .collect();

        assert!(schema.contains("name"));
        assert_eq!(schema.get("AREA"), Some(&FieldInfo::numeric(9, 2)));
        assert_eq!(schema.get_named("area").map(|(name, _)| name), Some("Area"));
        assert!(schema.get("MISSING").is_none());
    }

    #[test]
    fn first_colliding_field_wins() {
        let mut schema = AttributeSchema::new();
        assert!(schema.insert("CODE", FieldInfo::character(10)));
        assert!(!schema.insert("code", FieldInfo::numeric(4, 0)));
        assert_eq!(schema.len(), 1);
        assert_eq!(schema.get("Code"), Some(&FieldInfo::character(10)));
    }

    #[test]
    fn iteration_keeps_file_order() {
        let schema: AttributeSchema = [
            ("B", FieldInfo::character(1)),
            ("A", FieldInfo::character(2)),
            ("C", FieldInfo::character(3)),
        ]
        .into_iter()
        .collect();
        let names: Vec<&str> = schema.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }
}
