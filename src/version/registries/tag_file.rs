//! In-memory tag source, optionally loaded from a JSON tag file
//!
//! The tag file maps image names to their tags:
//!
//! ```json
//! { "dizin": ["1.2.3_abc1234", "1.2.4_def5678", "latest"] }
//! ```

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::version::error::RegistryError;
use crate::version::registry::Registry;

/// Registry implementation backed by a fixed image-to-tags mapping
#[derive(Debug, Clone, Default)]
pub struct TagFileRegistry {
    tags: HashMap<String, Vec<String>>,
}

impl TagFileRegistry {
    pub fn new(tags: HashMap<String, Vec<String>>) -> Self {
        Self { tags }
    }

    /// Load the mapping from a JSON tag file
    pub fn from_path(path: &Path) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse the mapping from JSON content
    pub fn from_json(content: &str) -> Result<Self, RegistryError> {
        let tags: HashMap<String, Vec<String>> = serde_json::from_str(content).map_err(|e| {
            warn!("Failed to parse tag file: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;
        Ok(Self::new(tags))
    }

    pub fn with_tags(mut self, image_name: &str, tags: Vec<&str>) -> Self {
        self.tags.insert(
            image_name.to_string(),
            tags.into_iter().map(|t| t.to_string()).collect(),
        );
        self
    }
}

#[async_trait::async_trait]
impl Registry for TagFileRegistry {
    async fn fetch_image_tags(&self, image_name: &str) -> Result<Vec<String>, RegistryError> {
        debug!("Getting tags for image \"{}\"", image_name);
        self.tags
            .get(image_name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(image_name.to_string()))
    }
}
