//! Logical name resolution
//!
//! A logical name resolves to the first catalog identifier that ends with it,
//! ignoring case. Case folding is Unicode lowercasing, independent of the
//! process locale, so resolution behaves the same on every device.

use crate::catalog::AssetCatalog;

/// Find the first identifier in `catalog` ending with `logical_name`
///
/// Matching is case-insensitive and scans in catalog order, so when several
/// identifiers share the suffix the earliest one wins. Empty names never
/// match.
pub fn resolve_resource(catalog: &dyn AssetCatalog, logical_name: &str) -> Option<String> {
    if logical_name.is_empty() {
        return None;
    }

    let found = catalog
        .resource_ids()
        .into_iter()
        .find(|id| ends_with_ignore_case(id, logical_name))
        .map(|id| id.into_owned());

    match &found {
        Some(id) => tracing::debug!("Resolved '{}' to '{}'", logical_name, id),
        None => tracing::debug!(
            "No resource in '{}' ends with '{}'",
            catalog.name(),
            logical_name
        ),
    }

    found
}

/// Case-insensitive `ends_with` using Unicode lowercasing
fn ends_with_ignore_case(haystack: &str, suffix: &str) -> bool {
    haystack.to_lowercase().ends_with(&suffix.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;

    fn catalog() -> MemoryCatalog {
        MemoryCatalog::new("app")
            .with("App.Icons.Star.svg", b"<svg/>".to_vec())
            .with("App.Icons.superstar.svg", b"<svg/>".to_vec())
            .with("App.Logos.badge.svg", b"<svg/>".to_vec())
    }

    #[test]
    fn test_exact_suffix_match() {
        let catalog = catalog();
        assert_eq!(
            resolve_resource(&catalog, "Logos.badge.svg").as_deref(),
            Some("App.Logos.badge.svg")
        );
        assert_eq!(
            resolve_resource(&catalog, "App.Logos.badge.svg").as_deref(),
            Some("App.Logos.badge.svg")
        );
    }

    #[test]
    fn test_case_insensitive_match() {
        let catalog = catalog();
        assert_eq!(
            resolve_resource(&catalog, "BADGE.SVG").as_deref(),
            Some("App.Logos.badge.svg")
        );
    }

    #[test]
    fn test_first_match_in_catalog_order_wins() {
        // Both "Star.svg" and "superstar.svg" end with "star.svg".
        let catalog = catalog();
        assert_eq!(
            resolve_resource(&catalog, "star.svg").as_deref(),
            Some("App.Icons.Star.svg")
        );
        assert_eq!(
            resolve_resource(&catalog, ".star.svg").as_deref(),
            Some("App.Icons.Star.svg")
        );
    }

    #[test]
    fn test_no_match() {
        let catalog = catalog();
        assert_eq!(resolve_resource(&catalog, "missing.svg"), None);
        assert_eq!(resolve_resource(&catalog, ""), None);
        assert_eq!(resolve_resource(&MemoryCatalog::new("empty"), "star.svg"), None);
    }

    #[test]
    fn test_unicode_case_folding() {
        let catalog = MemoryCatalog::new("intl").with("intl.ÉTOILE.svg", b"<svg/>".to_vec());
        assert_eq!(
            resolve_resource(&catalog, "étoile.svg").as_deref(),
            Some("intl.ÉTOILE.svg")
        );
        assert!(ends_with_ignore_case("intl.ÉTOILE.svg", "Étoile.SVG"));
        assert!(!ends_with_ignore_case("intl.svg", "étoile.svg"));
    }
}
