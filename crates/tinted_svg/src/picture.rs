//! Decoded SVG pictures

use tinted_core::{Rect, Size};
use usvg::Tree;

use crate::error::SvgError;
use crate::options::RenderOptions;

/// A decoded, resolution-independent SVG picture
///
/// Pictures are cheap to rebuild and are not cached: views decode a fresh one
/// for every paint and drop it afterwards.
#[derive(Clone)]
pub struct SvgPicture {
    /// The underlying usvg tree
    tree: Tree,
    /// Intrinsic size of the document
    pub width: f32,
    pub height: f32,
}

impl SvgPicture {
    /// Decode an SVG document from raw bytes
    pub fn from_data(data: &[u8], options: &RenderOptions) -> Result<Self, SvgError> {
        let usvg_options = options.to_usvg_options();
        let tree =
            Tree::from_data(data, &usvg_options).map_err(|e| SvgError::Parse(e.to_string()))?;

        let size = tree.size();

        Ok(Self {
            tree,
            width: size.width(),
            height: size.height(),
        })
    }

    /// Decode an SVG document from a string
    pub fn from_str(svg_str: &str, options: &RenderOptions) -> Result<Self, SvgError> {
        Self::from_data(svg_str.as_bytes(), options)
    }

    /// Intrinsic size of the document
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The picture's bounding box, anchored at the origin
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// The parsed tree, for rendering
    pub fn tree(&self) -> &Tree {
        &self.tree
    }
}

impl std::fmt::Debug for SvgPicture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvgPicture")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_size() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="12"></svg>"#;
        let picture = SvgPicture::from_str(svg, &RenderOptions::default()).unwrap();
        assert_eq!(picture.size(), Size::new(24.0, 12.0));
        assert_eq!(picture.bounds(), Rect::new(0.0, 0.0, 24.0, 12.0));
    }

    #[test]
    fn test_view_box_defines_size_when_dimensions_missing() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 48 32"></svg>"#;
        let picture = SvgPicture::from_str(svg, &RenderOptions::default()).unwrap();
        assert_eq!(picture.size(), Size::new(48.0, 32.0));
    }

    #[test]
    fn test_malformed_document() {
        let result = SvgPicture::from_data(b"<svg", &RenderOptions::default());
        assert!(matches!(result, Err(SvgError::Parse(_))));

        let result = SvgPicture::from_data(b"not an svg at all", &RenderOptions::default());
        assert!(matches!(result, Err(SvgError::Parse(_))));
    }
}
