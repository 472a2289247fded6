//! # System Lifecycle
//!
//! Starting, wiring, and stopping the table actors behind the order form.
//!
//! ## The SmoothieSystem Pattern
//!
//! [`SmoothieSystem`] owns one actor per table and hands out their clients:
//!
//! ```rust,ignore
//! let system = SmoothieSystem::open(&config)?;
//! system.catalog_client.seed(&config.seed_fruits).await?;
//!
//! let form = OrderForm::new(
//!     system.catalog_client.clone(),
//!     system.order_client.clone(),
//!     fruit_info,
//! );
//! // ... serve requests ...
//!
//! drop(form);
//! system.shutdown().await;
//! ```
//!
//! 1. **Open** - one SQLite connection per table, each with a busy timeout
//!    because both actors write to the same file
//! 2. **Ensure schema** - `CREATE TABLE IF NOT EXISTS` before any request
//! 3. **Spawn** - each actor runs its loop on the blocking pool
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of each mailbox
//! 2. **Actors detect closure** - `blocking_recv()` returns `None`
//! 3. **Await completion** - every request already queued is answered first
//!
//! An actor only stops once *every* clone of its client is gone, so anything
//! holding a clone (the HTTP router's state) must be dropped before
//! [`SmoothieSystem::shutdown`] can finish.
//!
//! ## Observability
//!
//! Logging is set up once with
//! [`setup_tracing`](table_actor::tracing::setup_tracing):
//!
//! ```bash
//! RUST_LOG=info cargo run -p smoothie-app    # Compact logs
//! RUST_LOG=debug cargo run -p smoothie-app   # Every select and append
//! ```

pub mod smoothie_system;

pub use smoothie_system::*;
