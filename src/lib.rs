pub mod config;
pub mod image;
pub mod logging;
pub mod version;

pub use image::Image;
pub use version::error::{RegistryError, ResolveError, VersionError};
pub use version::grammar::{is_fixed_version, is_range_specifier};
pub use version::matcher::best_semver_match;
pub use version::parts::{build, major, minor, part};
pub use version::resolver::resolve_image_version;
pub use version::sort::sorted_valid_versions;
