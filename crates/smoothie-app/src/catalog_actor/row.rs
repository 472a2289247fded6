//! TableRow implementation for the [`FruitOption`] type.

use crate::model::FruitOption;
use rusqlite::types::Value;
use table_actor::{Column, TableRow};

/// Rejection raised by [`FruitOption`]'s `on_append` hook.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Fruit name must not be blank")]
pub struct BlankFruitName;

impl TableRow for FruitOption {
    type Error = BlankFruitName;
    const COLUMNS: &'static [Column] = &[Column::text("FRUIT_NAME")];

    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self { name: row.get(0)? })
    }

    fn to_values(&self) -> Vec<Value> {
        vec![Value::Text(self.name.clone())]
    }

    fn on_append(&self) -> Result<(), BlankFruitName> {
        if self.name.trim().is_empty() {
            Err(BlankFruitName)
        } else {
            Ok(())
        }
    }
}
