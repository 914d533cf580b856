//! Image entity of a stack service
//!
//! An image reference in a stack file either pins a fixed version or
//! dereferences an environment variable holding a range specifier:
//!
//! ```text
//! private.registry.kth.se/dizin:1.2.23_abcdefg   static
//! private.registry.kth.se/dizin:${DIZIN_VERSION} semver, env key DIZIN_VERSION
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// `registry/name:version`
static IMAGE_AND_REGISTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)/(.+):(.+)$").expect("valid image regex"));

/// `[registry/]name:version`
static IMAGE_PARTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+/)?(.+):(.+)$").expect("valid image regex"));

/// `${KEY}`
static ENV_DEREFERENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$\{([a-zA-Z0-9_]+)\}$").expect("valid env regex"));

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ImageError {
    #[error("Could not parse image name and version from image section: \"{0}\"")]
    InvalidReference(String),
}

/// An image and the version-specifier state that drives resolution.
///
/// Serializes as `{image_name, static_version, semver_version}`. The
/// registry host is not part of that shape; the env key is recovered from
/// `static_version` on deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ImageRecord")]
pub struct Image {
    #[serde(rename = "image_name")]
    pub name: String,
    /// Registry host, `None` for external images
    #[serde(skip_serializing)]
    pub registry: Option<String>,
    /// Version as written after the `:` of the reference
    pub static_version: String,
    /// Resolved fixed version, set once a range specifier has been matched
    pub semver_version: Option<String>,
    /// Environment key holding the range specifier, for `${KEY}` versions
    #[serde(skip_serializing)]
    pub version_env_key: Option<String>,
}

#[derive(Deserialize)]
struct ImageRecord {
    image_name: String,
    static_version: String,
    #[serde(default)]
    semver_version: Option<String>,
}

impl From<ImageRecord> for Image {
    fn from(record: ImageRecord) -> Self {
        Self {
            version_env_key: env_key(&record.static_version),
            name: record.image_name,
            registry: None,
            static_version: record.static_version,
            semver_version: record.semver_version,
        }
    }
}

/// `KEY` of a `${KEY}` version
fn env_key(version: &str) -> Option<String> {
    ENV_DEREFERENCE_RE
        .captures(version)
        .map(|caps| caps[1].to_string())
}

impl Image {
    /// Parse an image reference such as `registry.kth.se/dizin:${DIZIN_VERSION}`
    pub fn parse(reference: &str) -> Result<Self, ImageError> {
        let registry = IMAGE_AND_REGISTRY_RE
            .captures(reference)
            .map(|caps| caps[1].to_string());
        if registry.is_none() {
            debug!("Image is external (contains no registry)");
        }

        let caps = IMAGE_PARTS_RE
            .captures(reference)
            .ok_or_else(|| ImageError::InvalidReference(reference.to_string()))?;
        let name = caps[2].to_string();
        let static_version = caps[3].to_string();

        let version_env_key = env_key(&static_version);

        match &version_env_key {
            Some(key) => debug!(
                "Image has semver version \"{}\" with env key \"{}\"",
                static_version, key
            ),
            None => debug!("Image has static version \"{}\"", static_version),
        }

        Ok(Self {
            name,
            registry,
            static_version,
            semver_version: None,
            version_env_key,
        })
    }

    /// Whether the version is a `${KEY}` reference to a range specifier
    pub fn is_semver(&self) -> bool {
        self.version_env_key.is_some()
    }

    /// The version to deploy: the resolved one if present, else the written one
    pub fn deploy_version(&self) -> &str {
        self.semver_version
            .as_deref()
            .unwrap_or(&self.static_version)
    }
}
