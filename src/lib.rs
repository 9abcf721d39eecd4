//! searx-pdbe: PDBe result source for a privacy-respecting metasearch engine
//!
//! Queries the Protein Data Bank in Europe search API and normalizes its
//! records into metasearch results, hiding or annotating entries by their
//! publication status.

pub mod config;
pub mod engines;
pub mod locales;
pub mod network;
pub mod results;
pub mod search;

pub use config::Settings;
pub use engines::Engine;
pub use results::Result as SearchResult;
pub use search::{Search, SearchError};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default timeout for engine requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 5;

/// Maximum timeout that can be set
pub const MAX_TIMEOUT: u64 = 30;
