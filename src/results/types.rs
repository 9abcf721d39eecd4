//! Result type definitions

use serde::{Deserialize, Serialize};
use url::Url;

/// A single search result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Result {
    /// The URL of the result
    pub url: String,
    /// Parsed URL for easier manipulation
    #[serde(skip)]
    pub parsed_url: Option<Url>,
    /// The title of the result
    pub title: String,
    /// Content snippet/description (HTML)
    pub content: Option<String>,
    /// Engine that returned this result
    pub engine: String,
    /// Positions in the engine's results
    #[serde(default)]
    pub positions: Vec<u32>,
    /// Category of the result
    pub category: Option<String>,
    /// Additional metadata
    #[serde(default)]
    pub metadata: ResultMetadata,
}

impl Result {
    /// Create a new result
    pub fn new(url: String, title: String, engine: String) -> Self {
        let parsed_url = Url::parse(&url).ok();

        Self {
            url,
            parsed_url,
            title,
            content: None,
            engine,
            positions: vec![],
            category: None,
            metadata: ResultMetadata::default(),
        }
    }

    /// Add content to the result
    pub fn with_content(mut self, content: String) -> Self {
        self.content = Some(content);
        self
    }

    /// Set the preview image
    pub fn with_img_src(mut self, img_src: String) -> Self {
        self.metadata.img_src = Some(img_src);
        self
    }

    /// Add a position
    pub fn with_position(mut self, position: u32) -> Self {
        self.positions.push(position);
        self
    }

    /// Get the hostname from the URL
    pub fn hostname(&self) -> Option<&str> {
        self.parsed_url.as_ref().and_then(|u| u.host_str())
    }

    /// Preview image URL, if any
    pub fn img_src(&self) -> Option<&str> {
        self.metadata.img_src.as_deref()
    }
}

/// Additional result metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultMetadata {
    /// Image URL (structure preview)
    pub img_src: Option<String>,
}
