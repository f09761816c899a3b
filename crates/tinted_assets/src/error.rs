//! Asset error types

use thiserror::Error;

/// Errors that can occur when looking up or reading assets
#[derive(Error, Debug)]
pub enum AssetError {
    /// Lookup attempted before any catalog was registered
    #[error("asset catalog not initialized: register a catalog before drawing")]
    CatalogNotInitialized,

    /// No resource with this exact identifier
    #[error("asset '{id}' not found in catalog")]
    NotFound { id: String },
}

/// Result type for asset operations
pub type Result<T> = std::result::Result<T, AssetError>;
