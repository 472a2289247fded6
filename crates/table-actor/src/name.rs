//! Validated SQL table names.

use crate::error::TableError;
use std::fmt::Display;

/// A table name that is safe to splice into SQL text.
///
/// Accepts `table` or `schema.table`, where each part is an ASCII identifier
/// (`[A-Za-z_][A-Za-z0-9_]*`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(String);

impl TableName {
    pub fn parse(raw: &str) -> Result<Self, TableError> {
        let parts: Vec<&str> = raw.split('.').collect();
        if parts.len() > 2 || !parts.iter().all(|p| is_identifier(p)) {
            return Err(TableError::InvalidTableName(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_identifier(part: &str) -> bool {
    let mut chars = part.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl Display for TableName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_schema_qualified_names() {
        assert_eq!(TableName::parse("orders").unwrap().as_str(), "orders");
        assert_eq!(
            TableName::parse("main.fruit_options").unwrap().as_str(),
            "main.fruit_options"
        );
    }

    #[test]
    fn rejects_names_that_would_inject_sql() {
        for raw in ["", "orders; DROP TABLE x", "1orders", "a.b.c", "a..b", "name-with-dash"] {
            assert!(
                matches!(TableName::parse(raw), Err(TableError::InvalidTableName(_))),
                "{raw:?} should be rejected"
            );
        }
    }
}
