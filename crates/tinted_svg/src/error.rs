//! SVG error types

use std::io;
use thiserror::Error;

/// Errors that can occur when decoding or rendering SVG documents
#[derive(Error, Debug)]
pub enum SvgError {
    /// SVG parsing error
    #[error("SVG parsing error: {0}")]
    Parse(String),

    /// Document or surface with an unusable size
    #[error("invalid size: {0}")]
    InvalidSize(String),

    /// Could not allocate a pixmap
    #[error("failed to create {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },
}

/// Errors from loading or saving render options
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error when reading or writing a config file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Malformed TOML, unknown values or unparsable colors
    #[error("invalid render options: {0}")]
    Toml(#[from] toml::de::Error),

    /// Options could not be serialized
    #[error("failed to serialize render options: {0}")]
    Serialize(#[from] toml::ser::Error),
}
