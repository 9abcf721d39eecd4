//! Search orchestration module
//!
//! Runs a query through an engine, bounding it by the engine timeout.

mod error;
mod executor;

pub use error::SearchError;
pub use executor::Search;
