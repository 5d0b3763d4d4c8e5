//! City demographics dashboard (citydash)
//!
//! Filter, sort and summarize a bundled dataset of Indian cities, in an
//! interactive terminal dashboard or as plain-text and JSON reports.
//!
//! Pure core / impure shell: `model`, `engine` and `state` are pure and
//! testable without a terminal; `view`, `logging` and `main` own the side
//! effects.

pub mod config;
pub mod engine;
pub mod logging;
pub mod model;
pub mod report;
pub mod state;
pub mod view;
