//! Catalog registration
//!
//! The registry is the one place a host stores its asset catalog. It is a
//! cheap, clonable handle: every clone sees the same registration, so the host
//! registers once at startup and passes clones to its views.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use rust_embed::RustEmbed;

use crate::catalog::{AssetCatalog, EmbeddedCatalog};
use crate::error::{AssetError, Result};
use crate::resolve::resolve_resource;

type SharedCatalog = Arc<dyn AssetCatalog>;

/// Shared handle to the registered asset catalog
#[derive(Clone, Default)]
pub struct AssetRegistry {
    catalog: Arc<RwLock<Option<SharedCatalog>>>,
}

impl AssetRegistry {
    /// Create a registry with no catalog registered
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with `catalog` already registered
    pub fn with_catalog(catalog: impl AssetCatalog + 'static) -> Self {
        let registry = Self::new();
        registry.register(catalog);
        registry
    }

    /// Register a catalog, replacing any previous registration
    pub fn register(&self, catalog: impl AssetCatalog + 'static) {
        self.register_shared(Arc::new(catalog));
    }

    /// Register an already shared catalog, replacing any previous registration
    pub fn register_shared(&self, catalog: SharedCatalog) {
        tracing::debug!(
            "Registering asset catalog '{}' ({} resources)",
            catalog.name(),
            catalog.len()
        );

        let previous = self
            .catalog
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(catalog);

        if let Some(previous) = previous {
            tracing::debug!("Replaced asset catalog '{}'", previous.name());
        }
    }

    /// Register a `rust-embed` folder as a manifest-style catalog
    ///
    /// See [`EmbeddedCatalog`] for how identifiers are formed from `prefix`.
    pub fn register_embedded<E: RustEmbed + 'static>(&self, prefix: impl Into<String>) {
        self.register(EmbeddedCatalog::<E>::new(prefix));
    }

    /// Drop the current registration
    pub fn unregister(&self) {
        self.catalog
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }

    /// Whether a catalog is registered
    pub fn is_registered(&self) -> bool {
        self.catalog
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// The registered catalog
    pub fn catalog(&self) -> Result<SharedCatalog> {
        self.catalog
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(AssetError::CatalogNotInitialized)
    }

    /// Resolve a logical name against the registered catalog
    ///
    /// `Ok(None)` means the catalog has no matching resource.
    pub fn resolve(&self, logical_name: &str) -> Result<Option<String>> {
        let catalog = self.catalog()?;
        Ok(resolve_resource(catalog.as_ref(), logical_name))
    }

    /// Read the resource with exactly this identifier from the registered catalog
    pub fn open(&self, id: &str) -> Result<Vec<u8>> {
        let catalog = self.catalog()?;
        let data = catalog.open(id)?;
        Ok(data.into_owned())
    }
}

impl fmt::Debug for AssetRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .catalog
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|c| c.name().to_string());

        f.debug_struct("AssetRegistry")
            .field("catalog", &name)
            .finish()
    }
}
