//! Version resolution layer for stack images
//!
//! This module selects the concrete image tag to deploy when a service image
//! requests a range of versions instead of a fixed one.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│    Sort     │────▶│   Matcher   │
//! │ (fetch tags)│     │(filter+order│     │ (best match)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        ▲                                       │
//!        │            ┌─────────────┐            │
//!        └────────────│  Resolver   │◀───────────┘
//!                     │(image state)│
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`grammar`]: Fixed version and range specifier grammars
//! - [`parts`]: Major/minor/build extraction and the numeric ordering key
//! - [`sort`]: Filtering and newest-first ordering of registry tags
//! - [`matcher`]: Best-match selection for `~` and `^` range specifiers
//! - [`registry`]: Registry trait for fetching image tags
//! - [`registries`]: Concrete tag sources
//! - [`resolver`]: Resolves the version of an [`Image`](crate::image::Image)
//! - [`error`]: Error types for matching, registries and resolution

pub mod error;
pub mod grammar;
pub mod matcher;
pub mod parts;
pub mod registries;
pub mod registry;
pub mod resolver;
pub mod sort;
