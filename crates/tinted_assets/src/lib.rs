//! Asset catalogs for Tinted
//!
//! A catalog is an enumerable, readable bundle of embedded resources. Views
//! find their SVG documents by matching a logical name against the end of the
//! catalog's full resource identifiers, so `"star.svg"` finds
//! `"app.icons.star.svg"`.
//!
//! Catalogs are registered on an [`AssetRegistry`], a shared context object
//! handed to every view at construction instead of living in a global.
//!
//! # Example
//!
//! ```rust
//! use tinted_assets::{AssetRegistry, MemoryCatalog};
//!
//! let registry = AssetRegistry::new();
//! registry.register(MemoryCatalog::new("app").with("app.icons.star.svg", b"<svg/>".to_vec()));
//!
//! let id = registry.resolve("STAR.svg").unwrap();
//! assert_eq!(id.as_deref(), Some("app.icons.star.svg"));
//! ```

mod catalog;
mod error;
mod registry;
mod resolve;

pub use catalog::{AssetCatalog, EmbeddedCatalog, MemoryCatalog};
pub use error::{AssetError, Result};
pub use registry::AssetRegistry;
pub use resolve::resolve_resource;
