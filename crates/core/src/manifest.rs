//! Site manifest
//!
//! Site-wide settings and external collaborator links, loaded from a
//! TOML file with built-in defaults when the file is absent.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::Theme;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Site-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteManifest {
    /// Organization display name
    pub organization: String,
    /// External form-hosting link for "join the movement". When absent,
    /// the join action is blocked and the user is informed.
    pub join_form_url: Option<String>,
    /// Donation flow landing page, consumed as an opaque link
    pub donate_url: Option<String>,
    /// Theme applied when nothing is saved and the OS gives no hint
    pub default_theme: Theme,
}

impl Default for SiteManifest {
    fn default() -> Self {
        Self {
            organization: "Dyesabel PH".to_string(),
            join_form_url: Some("https://forms.gle/joindyesabel".to_string()),
            donate_url: None,
            default_theme: Theme::Light,
        }
    }
}

impl SiteManifest {
    /// Load from a TOML file
    pub fn load(path: &Path) -> std::result::Result<Self, ManifestError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Load from a TOML file, falling back to built-in defaults when the
    /// file is absent or unreadable
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(manifest) => manifest,
            Err(ManifestError::Read(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Falling back to default site manifest");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_file_absent() {
        let manifest = SiteManifest::load_or_default(Path::new("/nonexistent/site.toml"));
        assert_eq!(manifest.organization, "Dyesabel PH");
        assert_eq!(manifest.default_theme, Theme::Light);
    }

    #[test]
    fn test_load_from_toml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(
            &path,
            r#"
organization = "Dyesabel PH - Staging"
join_form_url = "https://forms.example.org/join"
default_theme = "dark"
"#,
        )
        .unwrap();

        let manifest = SiteManifest::load(&path).unwrap();
        assert_eq!(manifest.organization, "Dyesabel PH - Staging");
        assert_eq!(
            manifest.join_form_url.as_deref(),
            Some("https://forms.example.org/join")
        );
        assert_eq!(manifest.default_theme, Theme::Dark);
        assert!(manifest.donate_url.is_none());
    }

    #[test]
    fn test_malformed_toml_falls_back() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(&path, "organization = [broken").unwrap();

        let manifest = SiteManifest::load_or_default(&path);
        assert_eq!(manifest.organization, "Dyesabel PH");
    }
}
