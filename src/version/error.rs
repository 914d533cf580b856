use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("Semver version under service environment is invalid: \"{0}\"")]
    InvalidRangeSpecifier(String),

    #[error("No image found for requested version \"{0}\"")]
    NoMatchingVersion(String),
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Image not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Could not fetch environment key \"{key}\" for image \"{image}\"")]
    MissingEnvironmentKey { key: String, image: String },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Version(#[from] VersionError),
}
