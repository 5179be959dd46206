//! # Observability & Tracing
//!
//! Structured logging for the manager, the actor and the demo binary.
//!
//! ## Configuration
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter without module
//! targets. Verbosity comes from `RUST_LOG` and defaults to `info`.
//!
//! ```bash
//! # Operations and rejected requests
//! RUST_LOG=info cargo run
//!
//! # Full payloads and store writes
//! RUST_LOG=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! | Level | Events |
//! |---|---|
//! | `info` | `Initialized` (count, next_id), `Created`/`Deleted` (id, size), `Updated` (id), actor start/shutdown |
//! | `warn` | rejected requests: invalid field, duplicate code, product not found |
//! | `error` | update of an unknown id, exhausted ids, mutation before initialize, unusable store, failed writes |
//! | `debug` | request payloads, loads, store writes (path, count, bytes) |
//!
//! Client calls run inside `#[instrument]` spans named after the operation, so a
//! rejected add shows up as:
//!
//! ```text
//! WARN add_product{code=abc123}: Product code already exists code=abc123
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber. Call once, at the start of `main`.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
