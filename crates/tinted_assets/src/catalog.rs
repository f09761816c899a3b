//! Catalog implementations

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use rust_embed::RustEmbed;

use crate::error::{AssetError, Result};

/// An enumerable bundle of resources addressed by identifier
///
/// Identifiers are full, catalog-defined strings (for example
/// `"app.icons.star.svg"`); [`resource_ids`](Self::resource_ids) yields them in
/// catalog order, which is the order suffix resolution scans them in.
pub trait AssetCatalog: Send + Sync {
    /// Human-readable catalog name used in logs
    fn name(&self) -> &str;

    /// All resource identifiers, in enumeration order
    fn resource_ids(&self) -> Vec<Cow<'_, str>>;

    /// Read the bytes of the resource with exactly this identifier
    fn open(&self, id: &str) -> Result<Cow<'_, [u8]>>;

    /// Number of resources in the catalog
    fn len(&self) -> usize {
        self.resource_ids().len()
    }

    /// Whether the catalog holds no resources
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory catalog
///
/// Enumeration order is insertion order. Inserting an existing identifier
/// replaces its bytes and keeps its position.
#[derive(Clone, Debug, Default)]
pub struct MemoryCatalog {
    name: String,
    entries: IndexMap<String, Vec<u8>>,
}

impl MemoryCatalog {
    /// Create an empty catalog
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: IndexMap::new(),
        }
    }

    /// Add or replace a resource
    pub fn insert(&mut self, id: impl Into<String>, data: impl Into<Vec<u8>>) -> &mut Self {
        self.entries.insert(id.into(), data.into());
        self
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, id: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(id, data);
        self
    }
}

impl AssetCatalog for MemoryCatalog {
    fn name(&self) -> &str {
        &self.name
    }

    fn resource_ids(&self) -> Vec<Cow<'_, str>> {
        self.entries.keys().map(|k| Cow::Borrowed(k.as_str())).collect()
    }

    fn open(&self, id: &str) -> Result<Cow<'_, [u8]>> {
        self.entries
            .get(id)
            .map(|data| Cow::Borrowed(data.as_slice()))
            .ok_or_else(|| AssetError::NotFound { id: id.to_string() })
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Catalog over a `rust-embed` folder
///
/// Identifiers are built manifest-style: the prefix, a dot, then the embedded
/// path with `/` replaced by `.`. With prefix `"app"`, the file
/// `icons/star.svg` is exposed as `"app.icons.star.svg"`. An empty prefix
/// yields `"icons.star.svg"`.
pub struct EmbeddedCatalog<E: RustEmbed> {
    name: String,
    /// Manifest id -> embedded path
    index: IndexMap<String, String>,
    _embed: PhantomData<fn() -> E>,
}

impl<E: RustEmbed> EmbeddedCatalog<E> {
    /// Index every file of the embedded folder under `prefix`
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let index = E::iter()
            .map(|path| (manifest_id(&prefix, &path), path.into_owned()))
            .collect::<IndexMap<_, _>>();

        tracing::debug!(
            "Indexed embedded catalog '{}' with {} resources",
            prefix,
            index.len()
        );

        Self {
            name: prefix,
            index,
            _embed: PhantomData,
        }
    }
}

impl<E: RustEmbed> fmt::Debug for EmbeddedCatalog<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddedCatalog")
            .field("name", &self.name)
            .field("resources", &self.index.len())
            .finish()
    }
}

impl<E: RustEmbed> AssetCatalog for EmbeddedCatalog<E> {
    fn name(&self) -> &str {
        &self.name
    }

    fn resource_ids(&self) -> Vec<Cow<'_, str>> {
        self.index.keys().map(|k| Cow::Borrowed(k.as_str())).collect()
    }

    fn open(&self, id: &str) -> Result<Cow<'_, [u8]>> {
        let path = self
            .index
            .get(id)
            .ok_or_else(|| AssetError::NotFound { id: id.to_string() })?;

        // Debug builds of rust-embed read from disk, so the file may have
        // vanished since indexing.
        let file = E::get(path).ok_or_else(|| AssetError::NotFound { id: id.to_string() })?;
        Ok(Cow::Owned(file.data.into_owned()))
    }

    fn len(&self) -> usize {
        self.index.len()
    }
}

fn manifest_id(prefix: &str, path: &str) -> String {
    let dotted = path.replace(['/', '\\'], ".");
    if prefix.is_empty() {
        dotted
    } else {
        format!("{}.{}", prefix, dotted)
    }
}
