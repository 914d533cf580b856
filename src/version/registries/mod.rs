//! Concrete tag sources

pub mod tag_file;

pub use tag_file::TagFileRegistry;
