// Common test utilities and fixtures

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in one suite but are used in the other
#[allow(unused_imports)]
pub use fixtures::{InMemoryRepository, InMemoryStore};
#[allow(unused_imports)]
pub use helpers::{create_test_services, item, item_with, test_config};
