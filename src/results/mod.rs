//! Result types for normalized search results
//!
//! Every engine produces results in this shape, regardless of the upstream
//! format it parses.

mod types;

pub use types::*;
