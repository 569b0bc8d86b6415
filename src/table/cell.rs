//! Cells and rows of a positional table as they arrive on the wire

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One table cell. Absent when the source held `null` or a non-scalar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cell(Option<String>);

impl Cell {
    pub const EMPTY: Cell = Cell(None);

    pub fn new(text: impl Into<String>) -> Self {
        Self(Some(text.into()))
    }

    pub fn text(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Strings are kept verbatim and numbers keep their JSON text
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(text) => Self(Some(text.clone())),
            Value::Number(number) => Self(Some(number.to_string())),
            _ => Self::EMPTY,
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(|value| Cell::from_value(&value))
    }
}

pub type Row = Vec<Cell>;

/// Ordered rows of ordered cells with no header metadata.
///
/// Column meaning comes from a [`Layout`](super::Layout). Decoding never
/// fails: a non-array table is empty and a non-array row has no cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PositionalTable {
    rows: Vec<Row>,
}

impl PositionalTable {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn from_value(value: &Value) -> Self {
        let rows = match value {
            Value::Array(rows) => rows
                .iter()
                .map(|row| match row {
                    Value::Array(cells) => cells.iter().map(Cell::from_value).collect(),
                    _ => Vec::new(),
                })
                .collect(),
            _ => Vec::new(),
        };
        Self { rows }
    }

    /// Decode the container at `key`; missing keys give an empty table
    pub fn from_field(object: &Value, key: &str) -> Self {
        object.get(key).map(Self::from_value).unwrap_or_default()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'de> Deserialize<'de> for PositionalTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(|value| PositionalTable::from_value(&value))
    }
}

/// Build a table from string literals, mostly for tests and fixtures
impl<const N: usize> From<Vec<[&str; N]>> for PositionalTable {
    fn from(rows: Vec<[&str; N]>) -> Self {
        Self::new(
            rows.into_iter()
                .map(|row| row.iter().map(|text| Cell::new(*text)).collect())
                .collect(),
        )
    }
}
