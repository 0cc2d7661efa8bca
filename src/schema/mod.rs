//! Header-prefix dispatch between row layouts.
//!
//! Files that mix record types usually start each row with a short type
//! code. A `Schema` maps each code (the header) to the layout for that record
//! type. Headers may not be prefixes of one another, so every row matches at
//! most one entry.

mod row;

pub use row::Row;

use std::sync::Arc;

use tracing::debug;

use crate::core::Signals;
use crate::error::{Error, Result};
use crate::strategy::{join_fixed, join_quoted_row, split_fixed, split_quoted_row};

/// How the columns of a row are laid out. The header is part of the row
/// text and is split like any other content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    Fixed { widths: Vec<usize>, fill: char },
    Quoted { signals: Signals, force_quotes: bool },
}

impl Layout {
    pub fn split(&self, row: &str) -> Result<Vec<String>> {
        match self {
            Layout::Fixed { widths, fill } => split_fixed(row, widths, *fill),
            Layout::Quoted { signals, .. } => split_quoted_row(row, signals),
        }
    }

    pub fn join<I, S>(&self, fields: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self {
            Layout::Fixed { widths, fill } => join_fixed(fields, widths, *fill),
            Layout::Quoted {
                signals,
                force_quotes,
            } => join_quoted_row(fields, signals, *force_quotes),
        }
    }
}

/// Layout and column names for rows starting with `header`
#[derive(Debug, Clone)]
pub struct SchemaEntry {
    header: String,
    layout: Layout,
    names: Arc<[String]>,
}

impl SchemaEntry {
    pub fn new<N, S>(header: impl Into<String>, layout: Layout, names: N) -> Self
    where
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SchemaEntry {
            header: header.into(),
            layout,
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Attach this entry's column names to split fields
    pub fn wrap(&self, fields: Vec<String>) -> Row {
        Row::new(Arc::clone(&self.names), fields)
    }
}

/// Set of entries keyed by header prefix
#[derive(Debug, Clone, Default)]
pub struct Schema {
    entries: Vec<SchemaEntry>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entry. Rejects empty headers and headers that are a
    /// prefix of (or prefixed by) one already registered.
    pub fn add(&mut self, entry: SchemaEntry) -> Result<()> {
        if entry.header.is_empty() {
            return Err(Error::EmptyHeader);
        }
        if let Some(existing) = self.entries.iter().find(|e| {
            e.header.starts_with(entry.header.as_str()) || entry.header.starts_with(e.header.as_str())
        }) {
            return Err(Error::HeaderConflict {
                existing: existing.header.clone(),
                new: entry.header,
            });
        }
        debug!(header = %entry.header, columns = entry.names.len(), "schema entry added");
        self.entries.push(entry);
        Ok(())
    }

    /// Builder-style `add`
    pub fn with(mut self, entry: SchemaEntry) -> Result<Self> {
        self.add(entry)?;
        Ok(self)
    }

    /// The entry whose header starts `row`
    pub fn entry_for_row(&self, row: &str) -> Result<&SchemaEntry> {
        self.entries
            .iter()
            .find(|e| row.starts_with(e.header.as_str()))
            .ok_or(Error::NoSchemaEntry)
    }

    /// The entry registered under exactly `header`
    pub fn entry(&self, header: &str) -> Result<&SchemaEntry> {
        self.entries
            .iter()
            .find(|e| e.header == header)
            .ok_or_else(|| Error::UnknownHeader(header.to_string()))
    }

    /// Split `row` with the layout selected by its header
    pub fn split(&self, row: &str) -> Result<Row> {
        let entry = self.entry_for_row(row)?;
        let fields = entry.layout.split(row)?;
        Ok(entry.wrap(fields))
    }

    /// Join fields with the layout registered under `header`
    pub fn join<I, S>(&self, header: &str, fields: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.entry(header)?.layout.join(fields)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::new()
            .with(SchemaEntry::new(
                "H",
                Layout::Fixed {
                    widths: vec![1, 6, 4],
                    fill: ' ',
                },
                ["kind", "name", "year"],
            ))
            .unwrap()
            .with(SchemaEntry::new(
                "D,",
                Layout::Quoted {
                    signals: Signals::csv(),
                    force_quotes: false,
                },
                ["kind", "item", "amount"],
            ))
            .unwrap()
    }

    #[test]
    fn test_dispatch_by_header() {
        let schema = schema();
        assert_eq!(schema.entry_for_row("Hbooks 2024").unwrap().header(), "H");
        assert_eq!(schema.entry_for_row("D,pen,3").unwrap().header(), "D,");
        assert!(matches!(
            schema.entry_for_row("X,1"),
            Err(Error::NoSchemaEntry)
        ));
    }

    #[test]
    fn test_split_wraps_names() {
        let schema = schema();
        let header = schema.split("Hbooks 2024").unwrap();
        assert_eq!(header.get_by_name("name"), Some("books"));
        assert_eq!(header.get_by_name("year"), Some("2024"));

        let detail = schema.split("D,\"pen, blue\",3").unwrap();
        assert_eq!(detail.get_by_name("item"), Some("pen, blue"));
        assert_eq!(detail.get(0), Some("D"));
    }

    #[test]
    fn test_join_by_header() {
        let schema = schema();
        assert_eq!(schema.join("H", ["H", "books", "2024"]).unwrap(), "Hbooks 2024");
        assert_eq!(schema.join("D,", ["D", "a,b", "1"]).unwrap(), "D,\"a,b\",1");
        assert_eq!(
            schema.join("Z", ["Z"]),
            Err(Error::UnknownHeader("Z".to_string()))
        );
    }

    #[test]
    fn test_prefix_conflicts_rejected() {
        let mut schema = schema();
        let layout = Layout::Fixed {
            widths: vec![2],
            fill: ' ',
        };
        assert_eq!(
            schema.add(SchemaEntry::new("HX", layout.clone(), ["a"])),
            Err(Error::HeaderConflict {
                existing: "H".to_string(),
                new: "HX".to_string(),
            })
        );
        assert_eq!(
            schema.add(SchemaEntry::new("D", layout.clone(), ["a"])),
            Err(Error::HeaderConflict {
                existing: "D,".to_string(),
                new: "D".to_string(),
            })
        );
        assert_eq!(
            schema.add(SchemaEntry::new("", layout.clone(), ["a"])),
            Err(Error::EmptyHeader)
        );
        assert!(schema.add(SchemaEntry::new("T", layout, ["a"])).is_ok());
        assert_eq!(schema.len(), 3);
    }
}
