//! Registry test utilities

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use stack_version::version::error::RegistryError;
use stack_version::version::registry::Registry;

/// Mock registry for testing
#[derive(Default)]
pub struct MockRegistry {
    tags: HashMap<String, Vec<String>>,
    calls: AtomicUsize,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tags(mut self, image_name: &str, tags: Vec<&str>) -> Self {
        self.tags.insert(
            image_name.to_string(),
            tags.into_iter().map(|t| t.to_string()).collect(),
        );
        self
    }

    /// Number of fetches made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Registry for MockRegistry {
    async fn fetch_image_tags(&self, image_name: &str) -> Result<Vec<String>, RegistryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.tags.get(image_name) {
            Some(tags) => Ok(tags.clone()),
            None => Err(RegistryError::NotFound(image_name.to_string())),
        }
    }
}

/// Registry that always fails with an invalid response
pub struct FailingRegistry;

#[async_trait]
impl Registry for FailingRegistry {
    async fn fetch_image_tags(&self, _image_name: &str) -> Result<Vec<String>, RegistryError> {
        Err(RegistryError::InvalidResponse(
            "registry did not return any tags".to_string(),
        ))
    }
}

/// Build a service environment from KEY/VALUE pairs
pub fn environment(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
