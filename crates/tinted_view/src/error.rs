//! View error types

use thiserror::Error;
use tinted_assets::AssetError;
use tinted_svg::SvgError;

/// Why a paint could not draw its resource
#[derive(Error, Debug)]
pub enum ViewError {
    /// No asset catalog has been registered
    #[error("asset catalog not initialized")]
    CatalogNotInitialized,

    /// No catalog identifier ends with the requested name
    #[error("resource '{name}' not found")]
    ResourceNotFound { name: String },

    /// The resolved resource could not be read
    #[error("failed to open resource '{id}': {source}")]
    Open {
        id: String,
        #[source]
        source: AssetError,
    },

    /// The resource is not a usable SVG document
    #[error("failed to decode resource '{id}': {source}")]
    Decode {
        id: String,
        #[source]
        source: SvgError,
    },

    /// The decoded picture has no area to draw
    #[error("resource '{id}' decoded to an empty picture")]
    EmptyPicture { id: String },

    /// The tint layer could not be created
    #[error("failed to render tint layer: {0}")]
    Layer(#[source] SvgError),
}

impl ViewError {
    /// The resolved catalog identifier, when resolution got that far
    pub fn resource_id(&self) -> Option<&str> {
        match self {
            ViewError::Open { id, .. }
            | ViewError::Decode { id, .. }
            | ViewError::EmptyPicture { id } => Some(id.as_str()),
            _ => None,
        }
    }
}

/// Error returned from a failed paint, wrapping the cause
#[derive(Error, Debug)]
#[error("failed to paint SVG resource '{resource}'")]
pub struct PaintError {
    /// The logical resource name the view was asked to draw
    pub resource: String,
    /// What went wrong
    #[source]
    pub source: ViewError,
}

impl PaintError {
    pub fn kind(&self) -> &ViewError {
        &self.source
    }

    /// The resolved catalog identifier, when resolution got that far
    pub fn resource_id(&self) -> Option<&str> {
        self.source.resource_id()
    }
}
