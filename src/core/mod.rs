//! Core domain logic (transport-agnostic)
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **domain**: Media repository collaborator trait
//! - **store**: Document store collaborator trait
//! - **telemetry**: tracing-subscriber initialization
//! - **indexer**: Slicing, document building, batch pipeline
//! - **search**: Query compilation and execution
//! - **services**: Unified service container

pub mod config;
pub mod domain;
pub mod error;
pub mod indexer;
pub mod search;
pub mod services;
pub mod store;
pub mod telemetry;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, SearchError};
pub use services::Services;
