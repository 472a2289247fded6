//! # Order Form
//!
//! One render pass of the smoothie order page: read the catalog, show the
//! widgets, fetch enrichment data once something is selected, and write the
//! order when the submit button was pressed.
//!
//! Every step runs in sequence inside [`OrderForm::render`]. Database errors
//! abort the pass with a [`PageError`]; enrichment failures only add an error
//! banner.

use crate::catalog_actor::CatalogError;
use crate::clients::{CatalogClient, OrderClient};
use crate::fruit_info::{EnrichmentData, FruitInfoSource};
use crate::model::{prepare_order, IngredientSelection, MAX_INGREDIENTS};
use crate::order_actor::OrderError;
use crate::page::{Block, FormState, Page, INGREDIENTS_FIELD, NAME_FIELD, SUBMIT_FIELD};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// The fruit looked up on every pass with a non-empty selection.
pub const ENRICHMENT_FRUIT: &str = "watermelon";

pub const TITLE: &str = "Customise Your Smoothie :cup_with_straw:";
pub const SUCCESS_MESSAGE: &str = "Your Smoothie is ordered!";
pub const SUCCESS_ICON: &str = "\u{2705}";

/// A failure that ends the render pass.
#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Order(#[from] OrderError),
}

/// The order page and the services it reads from and writes to.
#[derive(Clone)]
pub struct OrderForm {
    catalog: CatalogClient,
    orders: OrderClient,
    fruit_info: Arc<dyn FruitInfoSource>,
}

impl OrderForm {
    pub fn new(
        catalog: CatalogClient,
        orders: OrderClient,
        fruit_info: Arc<dyn FruitInfoSource>,
    ) -> Self {
        Self {
            catalog,
            orders,
            fruit_info,
        }
    }

    /// Runs one render pass for the given widget state.
    #[instrument(skip(self, form), fields(submitted = form.submitted))]
    pub async fn render(&self, form: &FormState) -> Result<Page, PageError> {
        let mut page = Page::new();
        page.push(Block::Title(TITLE.to_string()));
        page.push(Block::Text(
            "Choose the fruits you want in your custom smoothie!".to_string(),
        ));
        page.push(Block::TextInput {
            label: "Name on Smoothie:".to_string(),
            field: NAME_FIELD,
            value: form.name.clone(),
        });
        page.push(Block::LabeledText {
            label: "The name on the smoothie will be:".to_string(),
            value: form.name.clone(),
        });

        let catalog = self.catalog.fruit_names().await?;
        let selection = IngredientSelection::normalize(&catalog, &form.ingredients);
        page.push(Block::MultiSelect {
            label: format!("Choose up to {MAX_INGREDIENTS} ingredients:"),
            field: INGREDIENTS_FIELD,
            options: catalog,
            selected: selection.names().to_vec(),
            max_selections: MAX_INGREDIENTS,
        });

        if selection.is_empty() {
            return Ok(page);
        }

        self.push_enrichment(&mut page).await;

        page.push(Block::Button {
            label: "Submit Order".to_string(),
            field: SUBMIT_FIELD,
        });

        if form.submitted {
            match prepare_order(&form.name, &selection) {
                Ok(order) => {
                    self.orders.submit_order(order).await?;
                    info!(ingredients = selection.names().len(), "Order placed");
                    page.push(Block::Success {
                        message: SUCCESS_MESSAGE.to_string(),
                        icon: SUCCESS_ICON,
                    });
                }
                Err(rejection) => page.push(Block::Warning(rejection.to_string())),
            }
        }

        Ok(page)
    }

    async fn push_enrichment(&self, page: &mut Page) {
        match self.fruit_info.fetch(ENRICHMENT_FRUIT).await {
            Ok(value) => page.push(match EnrichmentData::from(value) {
                EnrichmentData::Table(table) => Block::DataTable(table),
                EnrichmentData::Object(value) => Block::Json(value),
                EnrichmentData::Unexpected(kind) => {
                    Block::Text(format!("Unexpected API response type: {kind}"))
                }
            }),
            Err(e) => {
                warn!(error = %e, fruit = ENRICHMENT_FRUIT, "Enrichment fetch failed");
                page.push(Block::Error(format!(
                    "Failed to fetch SmoothieFroot data: {e}"
                )));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fruit_info::EnrichmentError;
    use crate::model::{FruitOption, Order, OrderRejection};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Mutex;
    use table_actor::mock::MockTable;
    use table_actor::TableError;

    /// Enrichment source answering every fetch with the same canned outcome.
    struct FakeFruitInfo {
        body: Option<Value>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeFruitInfo {
        fn ok(body: Value) -> Arc<Self> {
            Arc::new(Self {
                body: Some(body),
                calls: Mutex::new(vec![]),
            })
        }

        fn unavailable() -> Arc<Self> {
            Arc::new(Self {
                body: None,
                calls: Mutex::new(vec![]),
            })
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl FruitInfoSource for FakeFruitInfo {
        async fn fetch(&self, fruit: &str) -> Result<Value, EnrichmentError> {
            self.calls.lock().unwrap().push(fruit.to_string());
            self.body.clone().ok_or_else(|| EnrichmentError::Status {
                status: 503,
                url: format!("http://fake/{fruit}"),
            })
        }
    }

    fn catalog_rows() -> Vec<FruitOption> {
        ["Apple", "Banana", "Kiwi", "Mango"]
            .into_iter()
            .map(FruitOption::new)
            .collect()
    }

    fn form(name: &str, ingredients: &[&str], submitted: bool) -> FormState {
        FormState {
            name: name.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            submitted,
        }
    }

    struct Harness {
        catalog: MockTable<FruitOption>,
        orders: MockTable<Order>,
        fruit_info: Arc<FakeFruitInfo>,
        form: OrderForm,
    }

    fn harness(fruit_info: Arc<FakeFruitInfo>) -> Harness {
        let catalog = MockTable::<FruitOption>::new();
        let orders = MockTable::<Order>::new();
        let form = OrderForm::new(
            CatalogClient::new(catalog.client()),
            OrderClient::new(orders.client()),
            fruit_info.clone(),
        );
        Harness {
            catalog,
            orders,
            fruit_info,
            form,
        }
    }

    #[tokio::test]
    async fn test_submit_appends_one_row() {
        let mut h = harness(FakeFruitInfo::ok(json!({"name": "Watermelon"})));
        h.catalog.expect_select().return_ok(catalog_rows());
        h.orders.expect_append().return_ok();

        let page = h
            .form
            .render(&form("Alice", &["Banana", "Mango"], true))
            .await
            .unwrap();

        assert_eq!(
            h.orders.appended(),
            vec![Order {
                ingredients: "Banana Mango".to_string(),
                name_on_order: "Alice".to_string(),
            }]
        );
        assert_eq!(page.successes().collect::<Vec<_>>(), [SUCCESS_MESSAGE]);
        assert_eq!(h.fruit_info.calls(), [ENRICHMENT_FRUIT]);
        assert!(page
            .blocks()
            .contains(&Block::Json(json!({"name": "Watermelon"}))));
        h.catalog.verify();
        h.orders.verify();
    }

    #[tokio::test]
    async fn test_blank_name_warns_without_writing() {
        let mut h = harness(FakeFruitInfo::ok(json!([])));
        h.catalog.expect_select().return_ok(catalog_rows());

        let page = h.form.render(&form("  ", &["Kiwi"], true)).await.unwrap();

        assert!(h.orders.appended().is_empty());
        assert_eq!(
            page.warnings().collect::<Vec<_>>(),
            [OrderRejection::MissingName.to_string()]
        );
        assert_eq!(page.successes().count(), 0);
    }

    #[tokio::test]
    async fn test_empty_selection_skips_fetch_and_button() {
        let mut h = harness(FakeFruitInfo::ok(json!({})));
        h.catalog.expect_select().return_ok(catalog_rows());

        // Unknown fruits normalize away, so this is still an empty selection
        let page = h
            .form
            .render(&form("Alice", &["Durian"], true))
            .await
            .unwrap();

        assert!(h.fruit_info.calls().is_empty());
        assert!(!page.has_button());
        assert!(h.orders.appended().is_empty());
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_submit_section() {
        let mut h = harness(FakeFruitInfo::unavailable());
        h.catalog.expect_select().return_ok(catalog_rows());
        h.orders.expect_append().return_ok();

        let page = h.form.render(&form("Bo", &["Apple"], true)).await.unwrap();

        let errors: Vec<_> = page.errors().collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Failed to fetch SmoothieFroot data: "));
        assert!(page.has_button());
        assert_eq!(h.orders.appended().len(), 1);
    }

    #[tokio::test]
    async fn test_scalar_payload_is_reported() {
        let mut h = harness(FakeFruitInfo::ok(json!(42)));
        h.catalog.expect_select().return_ok(catalog_rows());

        let page = h.form.render(&form("", &["Apple"], false)).await.unwrap();

        assert!(page.blocks().contains(&Block::Text(
            "Unexpected API response type: number".to_string()
        )));
        assert!(page.has_button());
        assert_eq!(page.warnings().count(), 0);
    }

    #[tokio::test]
    async fn test_page_lists_widgets_in_order() {
        let mut h = harness(FakeFruitInfo::ok(json!([{"name": "Watermelon"}])));
        h.catalog.expect_select().return_ok(catalog_rows());

        let page = h
            .form
            .render(&form("Cy", &["Mango", "Apple"], false))
            .await
            .unwrap();

        let blocks = page.blocks();
        assert_eq!(blocks[0], Block::Title(TITLE.to_string()));
        assert!(matches!(blocks[2], Block::TextInput { .. }));
        assert_eq!(
            blocks[3],
            Block::LabeledText {
                label: "The name on the smoothie will be:".to_string(),
                value: "Cy".to_string(),
            }
        );
        let Block::MultiSelect { selected, .. } = &blocks[4] else {
            panic!("expected the multi-select");
        };
        assert_eq!(selected, &["Mango", "Apple"]);
        assert!(matches!(blocks[5], Block::DataTable(_)));
        assert!(matches!(blocks[6], Block::Button { .. }));
        assert_eq!(blocks.len(), 7);
    }

    #[tokio::test]
    async fn test_catalog_failure_aborts_render() {
        let mut h = harness(FakeFruitInfo::ok(json!({})));
        h.catalog
            .expect_select()
            .return_err(TableError::Database(rusqlite::Error::InvalidQuery));

        let err = h.form.render(&form("Alice", &["Apple"], true)).await.unwrap_err();

        assert!(matches!(err, PageError::Catalog(CatalogError::DatabaseError(_))));
        assert!(h.fruit_info.calls().is_empty());
    }

    #[tokio::test]
    async fn test_write_failure_aborts_render() {
        let mut h = harness(FakeFruitInfo::ok(json!({})));
        h.catalog.expect_select().return_ok(catalog_rows());
        h.orders
            .expect_append()
            .return_err(TableError::Database(rusqlite::Error::InvalidQuery));

        let err = h.form.render(&form("Alice", &["Apple"], true)).await.unwrap_err();

        assert!(matches!(err, PageError::Order(OrderError::DatabaseError(_))));
    }
}
