//! Type-safe wrappers around [`TableClient`](table_actor::TableClient) and the
//! enrichment HTTP API.

pub mod catalog_client;
pub mod fruit_info_client;
pub mod order_client;

pub use catalog_client::*;
pub use fruit_info_client::*;
pub use order_client::*;
