//! Configuration: selectors used by the behaviors and transforms, plus the
//! object-storage settings that decide which external origin serves media.
//!
//! Every field has a default, so an empty TOML document is a valid config:
//!
//! ```toml
//! container_class = "omnipedia-media"
//! target_attr = "data-photoswipe-src"
//! group_tag = "media-group"
//!
//! [storage]
//! use_customhost = true
//! hostname = "media.example.org"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MediaError, MediaResult};

/// CSP directives that the storage origin is appended to
pub const MEDIA_SOURCE_DIRECTIVES: [&str; 2] = ["img-src", "media-src"];

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Class of the container wrapping each rendered media embed
    pub container_class: String,
    /// Anchor attribute holding the full-size lightbox image URL
    pub target_attr: String,
    /// Tag of media-group elements
    pub group_tag: String,
    /// Object storage settings
    pub storage: StorageSettings,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            container_class: "omnipedia-media".to_string(),
            target_attr: "data-photoswipe-src".to_string(),
            group_tag: "media-group".to_string(),
            storage: StorageSettings::default(),
        }
    }
}

impl MediaConfig {
    /// Parse a TOML document
    pub fn from_toml_str(s: &str) -> MediaResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> MediaResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| MediaError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded media config");
        Ok(config)
    }
}

/// Object storage settings (custom host / CNAME)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Serve files from a custom host instead of the site origin
    pub use_customhost: bool,
    pub hostname: String,
    /// Use `domain` as a CNAME in front of the storage host
    pub use_cname: bool,
    pub domain: String,
}

impl StorageSettings {
    /// The external origin media is served from, if any.
    ///
    /// `None` unless a custom host is enabled and a hostname is set. A
    /// configured CNAME domain wins over the hostname and is served over
    /// https.
    pub fn media_origin(&self) -> Option<String> {
        if !self.use_customhost || self.hostname.is_empty() {
            return None;
        }
        if self.use_cname && !self.domain.is_empty() {
            Some(format!("https://{}", self.domain))
        } else {
            Some(self.hostname.clone())
        }
    }

    /// `(directive, source)` pairs to append to a content security policy
    pub fn policy_additions(&self) -> Vec<(&'static str, String)> {
        let Some(origin) = self.media_origin() else {
            return Vec::new();
        };
        MEDIA_SOURCE_DIRECTIVES
            .iter()
            .map(|directive| (*directive, origin.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_toml() {
        let config = MediaConfig::from_toml_str("").unwrap();
        assert_eq!(config, MediaConfig::default());
        assert_eq!(config.target_attr, "data-photoswipe-src");
    }

    #[test]
    fn test_partial_toml() {
        let config = MediaConfig::from_toml_str(
            r#"
            target_attr = "data-lightbox-src"

            [storage]
            use_customhost = true
            hostname = "s3.example.org"
            "#,
        )
        .unwrap();
        assert_eq!(config.target_attr, "data-lightbox-src");
        assert_eq!(config.container_class, "omnipedia-media");
        assert_eq!(config.storage.media_origin().as_deref(), Some("s3.example.org"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = MediaConfig::from_toml_str("target_attr = [").unwrap_err();
        assert!(matches!(err, MediaError::ConfigParse(_)));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("media.toml");
        fs::write(&path, "group_tag = \"gallery\"\n").unwrap();
        let config = MediaConfig::from_path(&path).unwrap();
        assert_eq!(config.group_tag, "gallery");

        let missing = MediaConfig::from_path(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(missing, MediaError::ConfigIo { .. }));
    }

    #[test]
    fn test_media_origin_rules() {
        let mut storage = StorageSettings::default();
        assert_eq!(storage.media_origin(), None);

        storage.use_customhost = true;
        assert_eq!(storage.media_origin(), None, "hostname required");

        storage.hostname = "bucket.s3.example.org".into();
        assert_eq!(storage.media_origin().as_deref(), Some("bucket.s3.example.org"));

        storage.use_cname = true;
        assert_eq!(
            storage.media_origin().as_deref(),
            Some("bucket.s3.example.org"),
            "cname without domain falls back to hostname"
        );

        storage.domain = "media.example.org".into();
        assert_eq!(storage.media_origin().as_deref(), Some("https://media.example.org"));
    }

    #[test]
    fn test_policy_additions() {
        let storage = StorageSettings {
            use_customhost: true,
            hostname: "h.example.org".into(),
            ..Default::default()
        };
        assert_eq!(
            storage.policy_additions(),
            vec![
                ("img-src", "h.example.org".to_string()),
                ("media-src", "h.example.org".to_string()),
            ]
        );
        assert!(StorageSettings::default().policy_additions().is_empty());
    }
}
