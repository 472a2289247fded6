//! # Smoothie Order Form
//!
//! A single-page order form backed by SQLite table actors.
//!
//! - [`catalog_actor`] / [`order_actor`] - one [`TableActor`](table_actor::TableActor) per table
//! - [`clients`] - domain clients plus the enrichment HTTP client
//! - [`model`] - pure data: fruits, selections, orders
//! - [`order_form`] - one render pass, from widget state to [`page::Page`]
//! - [`http`] - the axum router serving the page
//! - [`lifecycle`] - starting and stopping the actors
//! - [`config`] - `SMOOTHIE_*` environment variables

pub mod catalog_actor;
pub mod clients;
pub mod config;
pub mod fruit_info;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod order_form;
pub mod page;
