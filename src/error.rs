//! Error types for the portfolio renderer

use thiserror::Error;

/// Result type alias for portfolio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside the page assembler
///
/// Assembling a page never fails; these cover content files, rendering the
/// assembled page and serving it.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read or encode an asset
    #[error("Asset error: {0}")]
    AssetError(String),

    /// Failed to render the assembled page
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Invalid configuration or content file
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failed to bind or respond on the page server
    #[error("Server error: {0}")]
    ServerError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::AssetError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigError(err.to_string())
    }
}
