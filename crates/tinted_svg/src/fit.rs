//! Aspect-preserving fit of a picture into a surface

use tiny_skia::Transform;
use tinted_core::{Point, Rect, Size};

/// How a picture is placed on a surface
///
/// The picture is scaled uniformly so it fits entirely inside the surface
/// (letterboxed or pillarboxed, never cropped) and its center lands on the
/// surface center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitInfo {
    /// Uniform scale factor applied to the picture
    pub scale: f32,
    /// Picture bounding box in picture space
    pub bounds: Rect,
    /// Surface size in pixels
    pub surface: Size,
}

impl FitInfo {
    /// Fit `bounds` into `surface`
    ///
    /// Returns `None` when either the bounds or the surface has no area.
    pub fn fit_centered(bounds: Rect, surface: Size) -> Option<Self> {
        if bounds.is_empty() || surface.is_empty() {
            return None;
        }

        let scale_x = surface.width / bounds.width();
        let scale_y = surface.height / bounds.height();

        Some(Self {
            scale: scale_x.min(scale_y),
            bounds,
            surface,
        })
    }

    /// Picture-to-surface transform
    ///
    /// Applied to a point, this translates by the negated picture center,
    /// scales, then translates to the surface center.
    pub fn transform(&self) -> Transform {
        let surface_center = self.surface.to_rect().center();
        let picture_center = self.bounds.center();

        Transform::from_translate(surface_center.x, surface_center.y)
            .pre_scale(self.scale, self.scale)
            .pre_translate(-picture_center.x, -picture_center.y)
    }

    /// Map a point from picture space to surface space
    pub fn map_point(&self, point: Point) -> Point {
        let t = self.transform();
        Point::new(
            t.sx * point.x + t.kx * point.y + t.tx,
            t.ky * point.x + t.sy * point.y + t.ty,
        )
    }

    /// Where the picture's center lands on the surface
    pub fn center(&self) -> Point {
        self.map_point(self.bounds.center())
    }

    /// The picture's bounding box in surface space
    pub fn placed_bounds(&self) -> Rect {
        let origin = self.map_point(self.bounds.origin);
        Rect::new(
            origin.x,
            origin.y,
            self.bounds.width() * self.scale,
            self.bounds.height() * self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn assert_point_eq(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_scale_is_min_of_axes() {
        let fit = FitInfo::fit_centered(Rect::new(0.0, 0.0, 24.0, 24.0), Size::new(100.0, 50.0))
            .unwrap();
        assert!((fit.scale - 50.0 / 24.0).abs() < EPSILON);
        assert!((fit.scale - 2.0833).abs() < 1e-3);

        let fit = FitInfo::fit_centered(Rect::new(0.0, 0.0, 40.0, 10.0), Size::new(100.0, 100.0))
            .unwrap();
        assert!((fit.scale - 2.5).abs() < EPSILON);
    }

    #[test]
    fn test_center_maps_to_surface_center() {
        let fit = FitInfo::fit_centered(Rect::new(0.0, 0.0, 24.0, 24.0), Size::new(100.0, 50.0))
            .unwrap();
        assert_point_eq(fit.center(), Point::new(50.0, 25.0));

        // Offset bounds still center correctly
        let fit = FitInfo::fit_centered(Rect::new(10.0, -5.0, 20.0, 10.0), Size::new(60.0, 60.0))
            .unwrap();
        assert_point_eq(fit.center(), Point::new(30.0, 30.0));
    }

    #[test]
    fn test_pillarbox_placement() {
        let fit = FitInfo::fit_centered(Rect::new(0.0, 0.0, 24.0, 24.0), Size::new(100.0, 50.0))
            .unwrap();
        let placed = fit.placed_bounds();

        assert!((placed.height() - 50.0).abs() < EPSILON);
        assert!((placed.y()).abs() < EPSILON);
        assert!((placed.x() - (100.0 - placed.width()) / 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(FitInfo::fit_centered(Rect::ZERO, Size::new(10.0, 10.0)).is_none());
        assert!(FitInfo::fit_centered(Rect::new(0.0, 0.0, 1.0, 1.0), Size::ZERO).is_none());
    }
}
