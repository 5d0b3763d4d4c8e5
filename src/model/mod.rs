//! Domain model types (pure).
//!
//! All types in this module are plain data. Validation happens in smart
//! constructors (`Dataset::new`, `SortKey::from_str`).

pub mod city;
pub mod data;
pub mod dataset;
pub mod error;
pub mod key_action;
pub mod query;

// Re-export for convenience
pub use city::{CityRecord, Region};
pub use dataset::Dataset;
pub use error::{AppError, DatasetError, QueryError};
pub use key_action::KeyAction;
pub use query::{Query, SortDirection, SortKey, SortValue};
