//! Project: the set of standard tables a user works with, grouped by category.

use std::collections::BTreeSet;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::table::{ColumnDefinition, TableDefinition};

/// Name of the category created together with a new project.
pub const DEFAULT_CATEGORY_NAME: &str = "Default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category_name: String,
    #[serde(default)]
    pub tables: Vec<TableDefinition>,
}

impl Category {
    pub fn new(category_name: impl Into<String>) -> Self {
        Self {
            category_name: category_name.into(),
            tables: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDefinition {
    pub project_name: String,
    pub created_at: DateTime<Local>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl ProjectDefinition {
    pub fn new(project_name: impl Into<String>, created_at: DateTime<Local>) -> Self {
        Self {
            project_name: project_name.into(),
            created_at,
            categories: vec![Category::new(DEFAULT_CATEGORY_NAME)],
        }
    }

    /// All tables across categories, in category then table order.
    pub fn tables(&self) -> impl Iterator<Item = &TableDefinition> {
        self.categories
            .iter()
            .flat_map(|category| category.tables.iter())
    }

    /// Find a table by id, ignoring ASCII case.
    pub fn table(&self, table_id: &str) -> Option<&TableDefinition> {
        self.tables().find(|table| table.matches_file_id(table_id))
    }

    pub fn table_mut(&mut self, table_id: &str) -> Option<&mut TableDefinition> {
        self.categories
            .iter_mut()
            .flat_map(|category| category.tables.iter_mut())
            .find(|table| table.matches_file_id(table_id))
    }

    /// Add a table to the first category, creating the default category when
    /// the project has none. Rejects ids already used in the project.
    pub fn add_table(&mut self, table: TableDefinition) -> Result<()> {
        check_not_blank(&table.table_id, &table.table_name)?;
        if self.table(&table.table_id).is_some() {
            return Err(ModelError::DuplicateTableId(table.table_id));
        }
        if self.categories.is_empty() {
            self.categories.push(Category::new(DEFAULT_CATEGORY_NAME));
        }
        if let Some(category) = self.categories.first_mut() {
            category.tables.push(table);
        }
        Ok(())
    }

    /// Remove a table and return it.
    pub fn remove_table(&mut self, table_id: &str) -> Result<TableDefinition> {
        for category in &mut self.categories {
            if let Some(index) = category
                .tables
                .iter()
                .position(|table| table.matches_file_id(table_id))
            {
                return Ok(category.tables.remove(index));
            }
        }
        Err(ModelError::UnknownTable(table_id.to_string()))
    }

    /// Change a table's id and name in place.
    ///
    /// The new id may differ from the old one only in case; any other table
    /// already using it is a conflict.
    pub fn rename_table(&mut self, table_id: &str, new_id: &str, new_name: &str) -> Result<()> {
        let new_id = new_id.trim();
        let new_name = new_name.trim();
        check_not_blank(new_id, new_name)?;
        if self.table(table_id).is_none() {
            return Err(ModelError::UnknownTable(table_id.to_string()));
        }
        let conflict = self
            .tables()
            .any(|table| table.matches_file_id(new_id) && !table.matches_file_id(table_id));
        if conflict {
            return Err(ModelError::DuplicateTableId(new_id.to_string()));
        }
        let table = self
            .table_mut(table_id)
            .ok_or_else(|| ModelError::UnknownTable(table_id.to_string()))?;
        table.table_id = new_id.to_string();
        table.table_name = new_name.to_string();
        Ok(())
    }

    /// Append columns to an existing table. Returns the new column count.
    pub fn add_columns(
        &mut self,
        table_id: &str,
        columns: impl IntoIterator<Item = ColumnDefinition>,
    ) -> Result<usize> {
        let table = self
            .table_mut(table_id)
            .ok_or_else(|| ModelError::UnknownTable(table_id.to_string()))?;
        table.columns.extend(columns);
        Ok(table.columns.len())
    }

    /// Check that table ids are unique across the project (ignoring case).
    pub fn validate_ids(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for table in self.tables() {
            if !seen.insert(table.table_id.to_ascii_uppercase()) {
                return Err(ModelError::DuplicateTableId(table.table_id.clone()));
            }
        }
        Ok(())
    }
}

fn check_not_blank(table_id: &str, table_name: &str) -> Result<()> {
    if table_id.trim().is_empty() {
        return Err(ModelError::BlankTableField { field: "id" });
    }
    if table_name.trim().is_empty() {
        return Err(ModelError::BlankTableField { field: "name" });
    }
    Ok(())
}
