//! Dyesabel Core Library
//!
//! Entity models, content store, permissions, mock identity resolution,
//! and preference storage for the Dyesabel advocacy site.

pub mod auth;
pub mod error;
pub mod invariants;
pub mod manifest;
pub mod models;
pub mod permissions;
pub mod storage;
pub mod store;

pub use auth::{IdentityResolver, MockResolver};
pub use error::{Error, Result};
pub use manifest::{ManifestError, SiteManifest};
pub use models::*;
pub use permissions::*;
pub use storage::{Database, PreferencesStore, Theme};
pub use store::{ContentRepository, InMemoryStore};
