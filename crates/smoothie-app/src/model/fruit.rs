use serde::{Deserialize, Serialize};

/// One selectable fruit from the catalog table.
///
/// # Table Actor
/// This struct implements [`TableRow`](table_actor::TableRow) (see
/// [`catalog_actor::row`](crate::catalog_actor::row)), so the catalog is
/// served by a [`TableActor`](table_actor::TableActor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FruitOption {
    pub name: String,
}

impl FruitOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
