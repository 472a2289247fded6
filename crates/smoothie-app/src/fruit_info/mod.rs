//! # Fruit Enrichment
//!
//! Supplementary third-party data shown next to the order form. It has no
//! bearing on whether an order is valid.
//!
//! - [`FruitInfoSource`] - the seam the order form fetches through
//! - [`EnrichmentData`] - how a JSON payload is displayed
//! - [`DataTable`] - the tabular rendering of a JSON array
//!
//! The HTTP implementation lives in
//! [`FruitInfoClient`](crate::clients::FruitInfoClient).

pub mod error;

pub use error::*;

use async_trait::async_trait;
use serde_json::Value;

/// Source of fruit enrichment data.
#[async_trait]
pub trait FruitInfoSource: Send + Sync {
    /// Fetches the JSON document describing `fruit`.
    async fn fetch(&self, fruit: &str) -> Result<Value, EnrichmentError>;
}

/// A JSON payload classified for display.
#[derive(Debug, Clone, PartialEq)]
pub enum EnrichmentData {
    /// A JSON array, shown as a table.
    Table(DataTable),
    /// A JSON object, shown as pretty-printed JSON.
    Object(Value),
    /// Anything else. Carries the JSON type name.
    Unexpected(&'static str),
}

impl From<Value> for EnrichmentData {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => EnrichmentData::Table(DataTable::from_items(&items)),
            Value::Object(_) => EnrichmentData::Object(value),
            other => EnrichmentData::Unexpected(json_type_name(&other)),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Header of the column holding array elements that are not objects.
pub const SCALAR_COLUMN: &str = "0";

/// Where a table column takes its cells from.
#[derive(Debug, PartialEq, Eq)]
enum ColumnSource<'a> {
    Key(&'a str),
    Scalar,
}

/// A rectangular table built from a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Columns are the union of object keys in first-seen order. Scalars and
    /// nested arrays share one [`SCALAR_COLUMN`], kept apart from any object
    /// key of the same name. Missing cells are empty.
    pub fn from_items(items: &[Value]) -> Self {
        let mut sources: Vec<ColumnSource<'_>> = Vec::new();
        for item in items {
            let found: Vec<ColumnSource<'_>> = match item {
                Value::Object(map) => map.keys().map(|k| ColumnSource::Key(k)).collect(),
                _ => vec![ColumnSource::Scalar],
            };
            for source in found {
                if !sources.contains(&source) {
                    sources.push(source);
                }
            }
        }

        let rows = items
            .iter()
            .map(|item| {
                sources
                    .iter()
                    .map(|source| match (item, source) {
                        (Value::Object(map), ColumnSource::Key(key)) => {
                            map.get(*key).map(cell_text).unwrap_or_default()
                        }
                        (Value::Object(_), ColumnSource::Scalar) => String::new(),
                        (other, ColumnSource::Scalar) => cell_text(other),
                        (_, ColumnSource::Key(_)) => String::new(),
                    })
                    .collect()
            })
            .collect();

        let columns = sources
            .iter()
            .map(|source| match source {
                ColumnSource::Key(key) => key.to_string(),
                ColumnSource::Scalar => SCALAR_COLUMN.to_string(),
            })
            .collect();

        Self { columns, rows }
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
