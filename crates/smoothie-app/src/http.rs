//! HTTP surface: the order page and a health check.
//!
//! Each request is one stateless render pass. `GET /` reads the widget state
//! from the query string and `POST /` from a urlencoded body.

use crate::order_form::OrderForm;
use crate::page::{failure_html, FormState};
use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tracing::error;

#[derive(Clone)]
pub struct AppState {
    pub form: Arc<OrderForm>,
}

impl AppState {
    pub fn new(form: OrderForm) -> Self {
        Self {
            form: Arc::new(form),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(show_form_handler).post(submit_form_handler))
        .route("/healthz", get(healthz_handler))
        .with_state(state)
}

async fn show_form_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Response {
    let form = FormState::from_urlencoded(query.as_deref().unwrap_or_default());
    render(&state, &form).await
}

async fn submit_form_handler(State(state): State<AppState>, body: String) -> Response {
    render(&state, &FormState::from_urlencoded(&body)).await
}

async fn healthz_handler() -> &'static str {
    "ok"
}

async fn render(state: &AppState, form: &FormState) -> Response {
    match state.form.render(form).await {
        Ok(page) => Html(page.to_html()).into_response(),
        Err(e) => {
            error!(error = %e, "Render pass failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(failure_html())).into_response()
        }
    }
}
