//! Error types for media-vdom.
//!
//! Most failure paths in this crate are local and silent: an unparseable
//! URL or a missing extension leaves the original resource in place. The
//! errors below are the ones a caller can act on.

use std::path::PathBuf;

use thiserror::Error;

use crate::embed::EmbedError;
use crate::webp::WebpError;

/// Errors that can occur in media operations.
#[derive(Debug, Error)]
pub enum MediaError {
    /// WebP derivative URL could not be derived
    #[error(transparent)]
    Webp(#[from] WebpError),

    /// A `<media>` element could not be resolved
    #[error(transparent)]
    Embed(#[from] EmbedError),

    /// Configuration file could not be read
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration is not valid TOML for [`MediaConfig`](crate::config::MediaConfig)
    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type alias for media operations.
pub type MediaResult<T> = Result<T, MediaError>;
