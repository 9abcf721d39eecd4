//! HTTP networking module
//!
//! Provides HTTP client functionality for making requests to search engines.

mod client;
mod user_agent;

pub use client::HttpClient;
pub use user_agent::{accept_html, accept_json, accept_language, searx_useragent};
