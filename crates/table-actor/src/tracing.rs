//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//! Verbosity is controlled by `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run    # actor start/stop, appends, render failures
//! RUST_LOG=debug cargo run   # every select, every row appended
//! RUST_LOG=table_actor=debug,smoothie_app=info cargo run
//! ```
//!
//! Module paths are hidden (`with_target(false)`); actors tag every line with
//! the `table` field instead.
//!
//! ```text
//! INFO Actor started table=orders
//! INFO submit_order: Sending submit_order to actor
//! INFO Appended table=orders appended=1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
