//! Rasterization with optional source-in tinting
//!
//! Pictures are rendered with resvg onto tiny-skia pixmaps. Tinting renders
//! into a transient layer first, floods the layer with the tint using
//! `SourceIn` (tint color, weighted by the picture's alpha), and composites the
//! layer onto the surface. Pixmap data stays premultiplied throughout.

use tiny_skia::{BlendMode, Paint, Pixmap, PixmapPaint, Transform};
use tinted_core::Color;

use crate::error::SvgError;
use crate::fit::FitInfo;
use crate::picture::SvgPicture;

/// Convert to a tiny-skia color, quantized to 8 bits per channel
pub fn to_skia_color(color: Color) -> tiny_skia::Color {
    let [r, g, b, a] = color.to_rgba8();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

/// Clear the whole pixmap to `color`
pub fn clear(pixmap: &mut Pixmap, color: Color) {
    pixmap.fill(to_skia_color(color));
}

/// Draw `picture` onto `pixmap` placed by `fit`
///
/// When `tint` is the [`Color::TRANSPARENT`] sentinel the picture keeps its own
/// colors; otherwise every covered pixel takes the tint color at the picture's
/// alpha.
pub fn draw_picture(
    pixmap: &mut Pixmap,
    picture: &SvgPicture,
    fit: &FitInfo,
    tint: Color,
) -> Result<(), SvgError> {
    let transform = fit.transform();

    if tint.is_transparent() {
        resvg::render(picture.tree(), transform, &mut pixmap.as_mut());
        return Ok(());
    }

    let (width, height) = (pixmap.width(), pixmap.height());
    let mut layer = Pixmap::new(width, height).ok_or(SvgError::Pixmap { width, height })?;

    resvg::render(picture.tree(), transform, &mut layer.as_mut());
    apply_tint(&mut layer, tint)?;

    pixmap.draw_pixmap(
        0,
        0,
        layer.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );

    Ok(())
}

/// Replace every pixel's color with `tint`, keeping the pixel's coverage
///
/// Equivalent to a source-in blend filter: fully transparent pixels stay
/// transparent, a pixel with alpha `a` becomes `tint` at alpha `a * tint.a`.
pub fn apply_tint(layer: &mut Pixmap, tint: Color) -> Result<(), SvgError> {
    let rect = tiny_skia::Rect::from_xywh(0.0, 0.0, layer.width() as f32, layer.height() as f32)
        .ok_or_else(|| {
            SvgError::InvalidSize(format!("{}x{} layer", layer.width(), layer.height()))
        })?;

    let mut paint = Paint::default();
    paint.set_color(to_skia_color(tint));
    paint.blend_mode = BlendMode::SourceIn;
    paint.anti_alias = false;

    layer.fill_rect(rect, &paint, Transform::identity(), None);
    Ok(())
}

/// Convert premultiplied RGBA to straight alpha
///
/// tiny-skia stores premultiplied alpha, while PNG encoders and most texture
/// uploads expect straight alpha.
pub fn to_straight_rgba(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len());

    for chunk in data.chunks_exact(4) {
        let a = chunk[3] as f32 / 255.0;
        if a > 0.0 {
            let unpremultiply = |c: u8| (c as f32 / a).round().min(255.0) as u8;
            result.extend_from_slice(&[
                unpremultiply(chunk[0]),
                unpremultiply(chunk[1]),
                unpremultiply(chunk[2]),
                chunk[3],
            ]);
        } else {
            result.extend_from_slice(&[0, 0, 0, 0]);
        }
    }

    result
}
