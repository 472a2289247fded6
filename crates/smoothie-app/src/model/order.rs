//! Represents a submitted smoothie order.
//!
//! # Table Actor
//! This struct implements [`TableRow`](table_actor::TableRow) (see
//! [`order_actor::row`](crate::order_actor::row)). Its `on_append` hook
//! runs the same checks as [`prepare_order`].
use crate::model::IngredientSelection;
use serde::{Deserialize, Serialize};

/// One row of the orders table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Selected fruit names joined by single spaces, in selection order.
    pub ingredients: String,
    /// The name exactly as typed. Only the emptiness check trims it.
    pub name_on_order: String,
}

/// Why an order was not built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OrderRejection {
    #[error("Please enter a name for your smoothie before submitting.")]
    MissingName,
    #[error("Please choose at least one ingredient before submitting.")]
    NoIngredients,
}

impl Order {
    /// Checks the invariant every stored order satisfies.
    pub fn check(&self) -> Result<(), OrderRejection> {
        if self.name_on_order.trim().is_empty() {
            return Err(OrderRejection::MissingName);
        }
        if self.ingredients.trim().is_empty() {
            return Err(OrderRejection::NoIngredients);
        }
        Ok(())
    }
}

/// Builds the row to append for a submit press.
///
/// Pure: takes the request-scoped widget values and performs no I/O.
pub fn prepare_order(
    name_on_order: &str,
    selection: &IngredientSelection,
) -> Result<Order, OrderRejection> {
    let order = Order {
        ingredients: selection.ingredients_string(),
        name_on_order: name_on_order.to_string(),
    };
    order.check()?;
    Ok(order)
}
