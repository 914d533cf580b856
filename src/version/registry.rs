//! Registry trait for fetching image tags

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;

/// Trait for fetching the tag list of an image from a registry
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches all tags for an image
    ///
    /// # Arguments
    /// * `image_name` - The image name without registry host or tag (e.g., "dizin")
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Raw tags in registry order; may contain non-version tags like "latest"
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_image_tags(&self, image_name: &str) -> Result<Vec<String>, RegistryError>;
}
