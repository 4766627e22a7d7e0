//! Errors reported by palette lookup, interpolation, contrast checks
//! and export.

use thiserror::Error;

/// Result type of this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A color name is absent from the registry.
    #[error("unknown color “{name}”; valid colors: {}", .valid.join(", "))]
    UnknownColor { name: String, valid: Vec<String> },

    /// A palette name is absent from the palette table.
    #[error("unknown palette “{name}”; valid palettes: {}", .valid.join(", "))]
    UnknownPalette { name: String, valid: Vec<String> },

    /// Bad count, bad standard or use case, bad rescale breakpoints…
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested export format is not known.
    #[error("unsupported format “{format}”; valid formats: {}",
            .valid.join(", "))]
    UnsupportedFormat { format: String, valid: Vec<String> },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}
