//! The tintable SVG view

use tiny_skia::Pixmap;
use tinted_assets::{AssetError, AssetRegistry};
use tinted_core::{Color, DirtyFlag, Invalidator, Size};
use tinted_svg::{clear, draw_picture, FitInfo, RenderOptions, SvgPicture};

use crate::error::{PaintError, ViewError};
use crate::state::ViewState;

/// What a successful paint did
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaintOutcome {
    /// The view has no layout size yet; nothing was touched
    NoSurface,
    /// No resource name is set; the surface was only cleared
    Empty,
    /// The picture was drawn with this placement
    Drawn(FitInfo),
}

/// A view that draws an SVG resource with an optional tint
///
/// Setting either property invalidates the view; the host's paint pass calls
/// [`on_paint_pass`](Self::on_paint_pass), which repaints when invalidated.
/// Every paint decodes the resource afresh.
pub struct TintableSvgView {
    registry: AssetRegistry,
    options: RenderOptions,
    state: ViewState,
    surface: Option<Pixmap>,
    invalidator: Invalidator,
}

impl TintableSvgView {
    /// Create a view resolving resources through `registry`
    pub fn new(registry: AssetRegistry) -> Self {
        Self::with_options(registry, RenderOptions::default())
    }

    /// Create a view with custom render options
    pub fn with_options(registry: AssetRegistry, options: RenderOptions) -> Self {
        Self {
            registry,
            options,
            state: ViewState::default(),
            surface: None,
            invalidator: Invalidator::new(),
        }
    }

    /// Share an external dirty flag, e.g. one frame scheduler for many views
    pub fn with_dirty_flag(mut self, flag: DirtyFlag) -> Self {
        self.invalidator = Invalidator::from_flag(flag);
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn resource_name(&self) -> Option<&str> {
        self.state.resource_name()
    }

    pub fn tint_color(&self) -> Color {
        self.state.tint_color()
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Set the logical resource name; an empty name draws nothing
    pub fn set_resource_name(&mut self, name: impl Into<String>) {
        self.set_state(self.state.clone().with_resource_name(name));
    }

    /// Unset the resource name
    pub fn clear_resource_name(&mut self) {
        self.set_state(self.state.clone().without_resource_name());
    }

    /// Set the tint; [`Color::TRANSPARENT`] disables tinting
    pub fn set_tint_color(&mut self, color: Color) {
        self.set_state(self.state.clone().with_tint_color(color));
    }

    /// Replace both properties with one invalidation
    ///
    /// Always invalidates, even when `state` equals the current state.
    pub fn set_state(&mut self, state: ViewState) {
        self.state = state;
        self.invalidator.invalidate();
    }

    /// Apply render options (e.g. a new clear color) and invalidate
    pub fn set_options(&mut self, options: RenderOptions) {
        self.options = options;
        self.invalidator.invalidate();
    }

    /// Resize the surface to the layout-measured size
    ///
    /// A zero dimension drops the surface until the next non-empty size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface = Pixmap::new(width, height);
        if self.surface.is_none() {
            tracing::debug!("View resized to {}x{}, no surface", width, height);
        }
        self.invalidator.invalidate();
    }

    /// Current surface size, zero when there is no surface
    pub fn size(&self) -> Size {
        self.surface
            .as_ref()
            .map(|s| Size::new(s.width() as f32, s.height() as f32))
            .unwrap_or(Size::ZERO)
    }

    /// Request a repaint on the next paint pass
    pub fn invalidate(&self) {
        self.invalidator.invalidate();
    }

    pub fn is_dirty(&self) -> bool {
        self.invalidator.is_dirty()
    }

    /// Paint if invalidated since the last pass
    ///
    /// Returns `Ok(None)` when nothing was pending. The pending flag is
    /// consumed even when the paint fails.
    pub fn on_paint_pass(&mut self) -> Result<Option<PaintOutcome>, PaintError> {
        if !self.invalidator.take() {
            return Ok(None);
        }
        self.paint().map(Some)
    }

    /// Clear the surface and draw the current resource
    ///
    /// On error the surface holds only the clear color.
    pub fn paint(&mut self) -> Result<PaintOutcome, PaintError> {
        let Some(surface) = self.surface.as_mut() else {
            return Ok(PaintOutcome::NoSurface);
        };

        clear(surface, self.options.clear_color);

        let Some(name) = self.state.resource_name() else {
            return Ok(PaintOutcome::Empty);
        };

        let tint = self.state.tint_color();
        match draw_resource(&self.registry, &self.options, surface, name, tint) {
            Ok(fit) => {
                tracing::debug!(
                    "Painted '{}' at scale {:.4} on {}x{}",
                    name,
                    fit.scale,
                    surface.width(),
                    surface.height()
                );
                Ok(PaintOutcome::Drawn(fit))
            }
            Err(source) => {
                tracing::warn!("Failed to paint '{}': {}", name, source);
                Err(PaintError {
                    resource: name.to_string(),
                    source,
                })
            }
        }
    }

    /// The surface, if the view has a size
    pub fn surface(&self) -> Option<&Pixmap> {
        self.surface.as_ref()
    }

    /// Premultiplied RGBA pixels of the surface
    pub fn pixels(&self) -> Option<&[u8]> {
        self.surface.as_ref().map(|s| s.data())
    }
}

impl std::fmt::Debug for TintableSvgView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TintableSvgView")
            .field("state", &self.state)
            .field("size", &self.size())
            .field("dirty", &self.is_dirty())
            .finish_non_exhaustive()
    }
}

/// Resolve, decode and draw `name` onto an already cleared surface
fn draw_resource(
    registry: &AssetRegistry,
    options: &RenderOptions,
    surface: &mut Pixmap,
    name: &str,
    tint: Color,
) -> Result<FitInfo, ViewError> {
    let id = match registry.resolve(name) {
        Ok(Some(id)) => id,
        Ok(None) => {
            return Err(ViewError::ResourceNotFound {
                name: name.to_string(),
            })
        }
        Err(AssetError::CatalogNotInitialized) => return Err(ViewError::CatalogNotInitialized),
        Err(source) => {
            return Err(ViewError::Open {
                id: name.to_string(),
                source,
            })
        }
    };

    let data = registry.open(&id).map_err(|source| ViewError::Open {
        id: id.clone(),
        source,
    })?;

    let picture = SvgPicture::from_data(&data, options).map_err(|source| ViewError::Decode {
        id: id.clone(),
        source,
    })?;

    let surface_size = Size::new(surface.width() as f32, surface.height() as f32);
    let fit = FitInfo::fit_centered(picture.bounds(), surface_size)
        .ok_or(ViewError::EmptyPicture { id })?;

    draw_picture(surface, &picture, &fit, tint).map_err(ViewError::Layer)?;

    Ok(fit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinted_assets::MemoryCatalog;
    use tinted_core::Point;

    const STAR: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24">
        <path d="M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z" fill="#FFC107"/>
    </svg>"##;

    #[derive(rust_embed::RustEmbed)]
    #[folder = "../tinted_assets/fixtures/"]
    struct Fixtures;

    fn registry() -> AssetRegistry {
        AssetRegistry::with_catalog(
            MemoryCatalog::new("app")
                .with("icons.star.svg", STAR.as_bytes().to_vec())
                .with("icons.broken.svg", b"<svg".to_vec()),
        )
    }

    fn star_view(width: u32, height: u32) -> TintableSvgView {
        let mut view = TintableSvgView::new(registry());
        view.resize(width, height);
        view.set_resource_name("star.svg");
        view
    }

    fn all_pixels_are(view: &TintableSvgView, rgba: [u8; 4]) -> bool {
        view.pixels()
            .unwrap()
            .chunks_exact(4)
            .all(|px| px == rgba.as_slice())
    }

    #[test]
    fn test_empty_name_only_clears() {
        let mut view = TintableSvgView::new(AssetRegistry::new());
        view.resize(10, 10);
        assert_eq!(view.paint().unwrap(), PaintOutcome::Empty);

        view.set_resource_name("");
        assert_eq!(view.paint().unwrap(), PaintOutcome::Empty);
        assert!(all_pixels_are(&view, [0, 0, 0, 0]));
    }

    #[test]
    fn test_clearing_name_erases_previous_picture() {
        let mut view = star_view(48, 48);
        view.paint().unwrap();
        assert!(!all_pixels_are(&view, [0, 0, 0, 0]));

        view.clear_resource_name();
        assert_eq!(view.paint().unwrap(), PaintOutcome::Empty);
        assert!(all_pixels_are(&view, [0, 0, 0, 0]));
    }

    #[test]
    fn test_no_surface_before_layout() {
        let mut view = TintableSvgView::new(registry());
        view.set_resource_name("star.svg");
        assert_eq!(view.paint().unwrap(), PaintOutcome::NoSurface);

        view.resize(0, 20);
        assert_eq!(view.size(), Size::ZERO);
        assert_eq!(view.paint().unwrap(), PaintOutcome::NoSurface);
    }

    #[test]
    fn test_star_fit_on_wide_surface() {
        let mut view = star_view(100, 50);
        let PaintOutcome::Drawn(fit) = view.paint().unwrap() else {
            panic!("expected the star to be drawn");
        };

        assert!((fit.scale - 50.0 / 24.0).abs() < 1e-4);
        let center = fit.center();
        assert!((center.x - 50.0).abs() < 1e-3 && (center.y - 25.0).abs() < 1e-3);

        // Pillarboxed: nothing drawn in the side margins
        let surface = view.surface().unwrap();
        assert_eq!(surface.pixel(5, 25).unwrap().alpha(), 0);
        assert_eq!(surface.pixel(94, 25).unwrap().alpha(), 0);
        assert_eq!(surface.pixel(50, 25).unwrap().alpha(), 255);
    }

    #[test]
    fn test_red_tint_replaces_star_color() {
        let mut plain = star_view(100, 50);
        plain.paint().unwrap();

        let mut tinted = star_view(100, 50);
        tinted.set_tint_color(Color::RED);
        tinted.paint().unwrap();

        let plain_px = plain.pixels().unwrap().chunks_exact(4);
        let tinted_px = tinted.pixels().unwrap().chunks_exact(4);
        for (p, t) in plain_px.zip(tinted_px) {
            if p[3] == 0 {
                assert_eq!(t, [0, 0, 0, 0]);
            } else {
                assert!((p[3] as i32 - t[3] as i32).abs() <= 1);
                // Premultiplied pure red
                assert!((t[0] as i32 - t[3] as i32).abs() <= 1);
                assert_eq!((t[1], t[2]), (0, 0));
            }
        }

        let center = tinted.surface().unwrap().pixel(50, 25).unwrap();
        assert_eq!(
            (center.red(), center.green(), center.blue(), center.alpha()),
            (255, 0, 0, 255)
        );
    }

    #[test]
    fn test_transparent_tint_matches_untinted() {
        let mut plain = star_view(64, 64);
        plain.paint().unwrap();

        let mut sentinel = star_view(64, 64);
        sentinel.set_tint_color(Color::RED);
        sentinel.set_tint_color(Color::TRANSPARENT);
        sentinel.paint().unwrap();

        assert_eq!(plain.pixels(), sentinel.pixels());
    }

    #[test]
    fn test_repaint_is_idempotent() {
        let mut view = star_view(37, 53);
        view.set_tint_color(Color::BLUE.with_alpha(0.75));

        view.paint().unwrap();
        let first = view.pixels().unwrap().to_vec();
        view.paint().unwrap();
        assert_eq!(first, view.pixels().unwrap());
    }

    #[test]
    fn test_missing_resource_leaves_clear_background() {
        let options = RenderOptions::default().with_clear_color(Color::WHITE);
        let mut view = TintableSvgView::with_options(registry(), options);
        view.resize(100, 50);
        view.set_resource_name("star.svg");
        view.paint().unwrap();

        view.set_resource_name("missing.svg");
        let err = view.paint().unwrap_err();
        assert_eq!(err.resource, "missing.svg");
        assert!(matches!(
            err.kind(),
            ViewError::ResourceNotFound { name } if name == "missing.svg"
        ));
        assert!(all_pixels_are(&view, [255, 255, 255, 255]));
    }

    #[test]
    fn test_decode_failure_carries_resolved_id() {
        let mut view = TintableSvgView::new(registry());
        view.resize(10, 10);
        view.set_resource_name("BROKEN.svg");

        let err = view.paint().unwrap_err();
        assert!(matches!(err.kind(), ViewError::Decode { .. }));
        assert_eq!(err.resource_id(), Some("icons.broken.svg"));
        assert!(all_pixels_are(&view, [0, 0, 0, 0]));
    }

    #[test]
    fn test_paint_before_registration() {
        let registry = AssetRegistry::new();
        let mut view = TintableSvgView::new(registry.clone());
        view.resize(10, 10);
        view.set_resource_name("star.svg");

        let err = view.paint().unwrap_err();
        assert!(matches!(err.kind(), ViewError::CatalogNotInitialized));

        // Registering later is picked up by existing views
        registry.register(MemoryCatalog::new("late").with("late.star.svg", STAR.as_bytes().to_vec()));
        assert!(matches!(view.paint().unwrap(), PaintOutcome::Drawn(_)));
    }

    #[test]
    fn test_paint_after_unregister_reports_missing_catalog() {
        let registry = registry();
        let mut view = TintableSvgView::new(registry.clone());
        view.resize(10, 10);
        view.set_resource_name("star.svg");
        assert!(view.paint().is_ok());

        registry.unregister();
        let err = view.paint().unwrap_err();
        assert!(matches!(err.kind(), ViewError::CatalogNotInitialized));
        assert_eq!(err.resource, "star.svg");
        assert_eq!(err.resource_id(), None);
    }

    #[test]
    fn test_setters_always_invalidate() {
        let mut view = star_view(20, 20);
        assert!(view.is_dirty());
        assert!(view.on_paint_pass().unwrap().is_some());
        assert!(!view.is_dirty());
        assert_eq!(view.on_paint_pass().unwrap(), None);

        // Same value again still schedules a redraw
        view.set_resource_name("star.svg");
        assert!(view.is_dirty());
        view.on_paint_pass().unwrap();

        view.set_tint_color(view.tint_color());
        assert!(view.is_dirty());
    }

    #[test]
    fn test_failed_paint_pass_consumes_flag() {
        let mut view = TintableSvgView::new(registry());
        view.resize(10, 10);
        view.set_resource_name("missing.svg");

        assert!(view.on_paint_pass().is_err());
        assert!(!view.is_dirty());
    }

    #[test]
    fn test_shared_dirty_flag() {
        let frame = Invalidator::new();
        let mut a = TintableSvgView::new(registry()).with_dirty_flag(frame.flag());
        let mut b = TintableSvgView::new(registry()).with_dirty_flag(frame.flag());

        a.resize(8, 8);
        assert!(frame.is_dirty());
        assert!(b.is_dirty());

        b.on_paint_pass().unwrap();
        assert!(!a.is_dirty());
    }

    #[test]
    fn test_end_to_end_with_embedded_catalog() {
        let registry = AssetRegistry::new();
        registry.register_embedded::<Fixtures>("");

        let mut view = TintableSvgView::new(registry);
        view.resize(100, 50);
        view.set_resource_name("star.svg");
        view.set_tint_color(Color::RED);

        let Some(PaintOutcome::Drawn(fit)) = view.on_paint_pass().unwrap() else {
            panic!("expected the star to be drawn");
        };
        assert!((fit.scale - 2.0833).abs() < 1e-3);
        let mapped = fit.map_point(Point::new(12.0, 12.0));
        assert!((mapped.x - 50.0).abs() < 1e-3 && (mapped.y - 25.0).abs() < 1e-3);

        let center = view.surface().unwrap().pixel(50, 25).unwrap();
        assert_eq!(
            (center.red(), center.green(), center.blue(), center.alpha()),
            (255, 0, 0, 255)
        );
    }
}
