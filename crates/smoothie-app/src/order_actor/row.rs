//! TableRow implementation for the [`Order`] type.

use crate::model::{Order, OrderRejection};
use rusqlite::types::Value;
use table_actor::{Column, TableRow};

impl TableRow for Order {
    type Error = OrderRejection;
    const COLUMNS: &'static [Column] = &[Column::text("INGREDIENTS"), Column::text("NAME_ON_ORDER")];

    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            ingredients: row.get(0)?,
            name_on_order: row.get(1)?,
        })
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.ingredients.clone()),
            Value::Text(self.name_on_order.clone()),
        ]
    }

    fn on_append(&self) -> Result<(), OrderRejection> {
        self.check()
    }
}
