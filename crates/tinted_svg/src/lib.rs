//! SVG decoding and rasterization for Tinted
//!
//! This crate turns SVG bytes into a [`SvgPicture`] using `usvg`, fits it into
//! a surface with aspect ratio preserved, and rasterizes it with `resvg` and
//! `tiny-skia`, optionally recolored through a source-in tint.
//!
//! # Example
//!
//! ```rust
//! use tinted_core::{Color, Size};
//! use tinted_svg::{draw_picture, FitInfo, RenderOptions, SvgPicture};
//!
//! let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24">
//!     <circle cx="12" cy="12" r="10" fill="white"/>
//! </svg>"#;
//!
//! let options = RenderOptions::default();
//! let picture = SvgPicture::from_str(svg, &options).unwrap();
//! let fit = FitInfo::fit_centered(picture.bounds(), Size::new(48.0, 48.0)).unwrap();
//!
//! let mut pixmap = tiny_skia::Pixmap::new(48, 48).unwrap();
//! draw_picture(&mut pixmap, &picture, &fit, Color::RED).unwrap();
//! assert_eq!(fit.scale, 2.0);
//! ```

mod error;
mod fit;
mod options;
mod picture;
mod rasterize;

pub use error::{ConfigError, SvgError};
pub use fit::FitInfo;
pub use options::{RenderOptions, ShapeRenderingMode};
pub use picture::SvgPicture;
pub use rasterize::{apply_tint, clear, draw_picture, to_skia_color, to_straight_rgba};
