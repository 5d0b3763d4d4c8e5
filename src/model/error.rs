//! Error types for citydash.
//!
//! Errors are `thiserror` enums, one per concern, composed into [`AppError`]
//! through `From` conversions so the shell can use `?` throughout.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level error returned from the application shell
//!   - [`DatasetError`] - integrity violations found while building a dataset
//!   - [`QueryError`] - malformed query input (unknown sort key or direction)
//!   - [`ConfigError`](crate::config::ConfigError) - config file failures
//!   - [`LoggingError`](crate::logging::LoggingError) - log file setup failures
//!   - [`TuiError`](crate::view::TuiError) - terminal failures in the dashboard
//!   - `std::io::Error` - stdout failures
//!
//! An empty query result is not an error: the engine returns an empty list
//! and the summary reports undefined means as `None`.

use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// The dataset failed validation.
    #[error("Invalid dataset: {0}")]
    Dataset(#[from] DatasetError),

    /// The query could not be built from user input.
    #[error("Invalid query: {0}")]
    Query(#[from] QueryError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or stdout I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The interactive dashboard failed.
    #[error("Dashboard error: {0}")]
    Tui(#[from] crate::view::TuiError),

    /// Report serialization failed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Dataset integrity violations.
///
/// These are precondition violations on the data, surfaced only while the
/// dataset is constructed. The query engine never checks for them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DatasetError {
    /// Two records share the same id.
    #[error("Duplicate city id {id}")]
    DuplicateId {
        /// The repeated id.
        id: u32,
    },

    /// Ids are ranks and must be positive.
    #[error("City '{name}' has id 0; ids must be positive")]
    ZeroId {
        /// Name of the offending city.
        name: String,
    },

    /// A record has no population, which would divide by zero in ratios.
    #[error("City {id} has a total population of zero")]
    ZeroPopulation {
        /// Id of the offending city.
        id: u32,
    },

    /// Gender split does not add up to the total.
    #[error("City {id}: male ({male}) + female ({female}) != total ({total})")]
    GenderMismatch {
        /// Id of the offending city.
        id: u32,
        /// Recorded male population.
        male: u64,
        /// Recorded female population.
        female: u64,
        /// Recorded total population.
        total: u64,
    },
}

/// Errors raised while building a query from user-facing strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Sort key is not one of the recognized keys.
    #[error("Unknown sort key '{0}' (expected one of: population, area, literacy, density, name)")]
    UnknownSortKey(String),

    /// Sort direction is neither ascending nor descending.
    #[error("Unknown sort direction '{0}' (expected 'asc' or 'desc')")]
    UnknownSortDirection(String),
}
