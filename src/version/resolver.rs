//! Image version resolution
//!
//! Drives the version engine for a single image: reads the range specifier
//! from the service environment, fetches the image tags, and stores the best
//! matching fixed version back onto the image.

use std::collections::HashMap;

use tracing::debug;

use crate::image::Image;
use crate::version::error::ResolveError;
use crate::version::matcher::best_semver_match;
use crate::version::registry::Registry;
use crate::version::sort::sorted_valid_versions;

/// Resolve the semver version of `image` against the tags in `registry`.
///
/// Static images are left untouched and `Ok(None)` is returned. For `${KEY}`
/// images the range specifier is read from `environment[KEY]`, matched, and
/// the result is stored in `image.semver_version` and returned.
pub async fn resolve_image_version(
    image: &mut Image,
    environment: &HashMap<String, String>,
    registry: &dyn Registry,
) -> Result<Option<String>, ResolveError> {
    let Some(env_key) = image.version_env_key.as_deref() else {
        return Ok(None);
    };

    let Some(range) = environment.get(env_key) else {
        debug!(
            "Could not fetch environment key \"{}\" for image \"{}\"",
            env_key, image.name
        );
        return Err(ResolveError::MissingEnvironmentKey {
            key: env_key.to_string(),
            image: image.name.clone(),
        });
    };
    debug!("Semver version before lookup is \"{}\"", range);

    let tags = registry.fetch_image_tags(&image.name).await?;
    debug!("Got tags from registry: {:?}", tags);

    let valid_versions = sorted_valid_versions(&tags);
    debug!("After sort and validation: {:?}", valid_versions);

    let version = best_semver_match(&valid_versions, range)?;
    debug!("Setting semver version to \"{}\"", version);

    image.semver_version = Some(version.clone());
    Ok(Some(version))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::error::{RegistryError, VersionError};
    use crate::version::registry::MockRegistry;
    use mockall::predicate::eq;

    fn environment(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn registry_returning(image_name: &'static str, tags: Vec<&str>) -> MockRegistry {
        let tags: Vec<String> = tags.into_iter().map(|t| t.to_string()).collect();
        let mut registry = MockRegistry::new();
        registry
            .expect_fetch_image_tags()
            .with(eq(image_name))
            .times(1)
            .returning(move |_| Ok(tags.clone()));
        registry
    }

    #[tokio::test]
    async fn resolve_image_version_stores_best_match() {
        let mut image = Image::parse("registry.kth.se/dizin:${DIZIN_VERSION}").unwrap();
        let registry = registry_returning("dizin", vec!["1.2.3", "1.2.9_abc", "1.3.0", "latest"]);

        let result = resolve_image_version(
            &mut image,
            &environment(&[("DIZIN_VERSION", "~1.2.0")]),
            &registry,
        )
        .await
        .unwrap();

        assert_eq!(result, Some("1.2.9_abc".to_string()));
        assert_eq!(image.semver_version, Some("1.2.9_abc".to_string()));
        assert_eq!(image.deploy_version(), "1.2.9_abc");
    }

    #[tokio::test]
    async fn resolve_image_version_skips_static_image() {
        let mut image = Image::parse("registry.kth.se/dizin:1.2.3").unwrap();
        let mut registry = MockRegistry::new();
        registry.expect_fetch_image_tags().never();

        let result = resolve_image_version(&mut image, &HashMap::new(), &registry)
            .await
            .unwrap();

        assert_eq!(result, None);
        assert_eq!(image.semver_version, None);
    }

    #[tokio::test]
    async fn resolve_image_version_fails_on_missing_environment_key() {
        let mut image = Image::parse("dizin:${DIZIN_VERSION}").unwrap();
        let mut registry = MockRegistry::new();
        registry.expect_fetch_image_tags().never();

        let result = resolve_image_version(
            &mut image,
            &environment(&[("OTHER", "^1.0.0")]),
            &registry,
        )
        .await;

        assert!(matches!(
            result,
            Err(ResolveError::MissingEnvironmentKey { key, image })
                if key == "DIZIN_VERSION" && image == "dizin"
        ));
    }

    #[tokio::test]
    async fn resolve_image_version_propagates_registry_error() {
        let mut image = Image::parse("dizin:${DIZIN_VERSION}").unwrap();
        let mut registry = MockRegistry::new();
        registry
            .expect_fetch_image_tags()
            .returning(|name| Err(RegistryError::NotFound(name.to_string())));

        let result = resolve_image_version(
            &mut image,
            &environment(&[("DIZIN_VERSION", "^1.0.0")]),
            &registry,
        )
        .await;

        assert!(matches!(
            result,
            Err(ResolveError::Registry(RegistryError::NotFound(_)))
        ));
        assert_eq!(image.semver_version, None);
    }

    #[tokio::test]
    async fn resolve_image_version_fails_without_matching_tag() {
        let mut image = Image::parse("dizin:${DIZIN_VERSION}").unwrap();
        let registry = registry_returning("dizin", vec!["1.0.0", "latest"]);

        let result = resolve_image_version(
            &mut image,
            &environment(&[("DIZIN_VERSION", "^2.0.0")]),
            &registry,
        )
        .await;

        assert!(matches!(
            result,
            Err(ResolveError::Version(VersionError::NoMatchingVersion(spec))) if spec == "^2.0.0"
        ));
    }

    #[tokio::test]
    async fn resolve_image_version_rejects_fixed_version_in_environment() {
        let mut image = Image::parse("dizin:${DIZIN_VERSION}").unwrap();
        let registry = registry_returning("dizin", vec!["1.0.0"]);

        let result = resolve_image_version(
            &mut image,
            &environment(&[("DIZIN_VERSION", "1.0.0")]),
            &registry,
        )
        .await;

        assert!(matches!(
            result,
            Err(ResolveError::Version(VersionError::InvalidRangeSpecifier(_)))
        ));
    }
}
