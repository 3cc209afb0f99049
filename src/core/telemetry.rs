//! Tracing initialization for embedding processes.
//!
//! This crate ships no binary; the process that wires in concrete
//! repository and store implementations calls [`init`] once at
//! startup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// Respects `RUST_LOG`; defaults to `media_search=info` when unset.
/// Calling this more than once panics, as with any global
/// subscriber installation.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "media_search=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
