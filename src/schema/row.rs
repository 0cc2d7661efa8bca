//! Field access by position or by column name.

use std::sync::Arc;

/// A split row with the column names of the schema entry that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    names: Arc<[String]>,
    fields: Vec<String>,
}

impl Row {
    pub fn new(names: Arc<[String]>, fields: Vec<String>) -> Self {
        Row { names, fields }
    }

    /// Field at `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Field under column `name`. Names beyond the field count yield `None`.
    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        let index = self.names.iter().position(|n| n == name)?;
        self.get(index)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }
}
