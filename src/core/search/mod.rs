//! Search module.
//!
//! Compiles structured query options into the store's boolean
//! query form and shapes executed results into paginated
//! identifier pages.

pub mod compile;
pub mod service;
pub mod shuffle;

pub use compile::{compile, BoolQuery, CompiledQuery, QueryClause, SortDirection, SortSpec};
pub use service::SearchService;
pub use shuffle::shuffle_score;
