//! Render options
//!
//! Options are plain data and can be loaded from a TOML file:
//!
//! ```toml
//! clear_color = "#00000000"
//! dpi = 96.0
//! font_family = "Times New Roman"
//! font_size = 12.0
//! shape_rendering = "geometric-precision"
//! load_system_fonts = false
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tinted_core::Color;

use crate::error::ConfigError;

/// Anti-aliasing mode for shapes, mirrors SVG `shape-rendering`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeRenderingMode {
    OptimizeSpeed,
    CrispEdges,
    #[default]
    GeometricPrecision,
}

impl From<ShapeRenderingMode> for usvg::ShapeRendering {
    fn from(mode: ShapeRenderingMode) -> Self {
        match mode {
            ShapeRenderingMode::OptimizeSpeed => usvg::ShapeRendering::OptimizeSpeed,
            ShapeRenderingMode::CrispEdges => usvg::ShapeRendering::CrispEdges,
            ShapeRenderingMode::GeometricPrecision => usvg::ShapeRendering::GeometricPrecision,
        }
    }
}

/// Options controlling how views decode and paint their pictures
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Color the surface is cleared to before every paint
    pub clear_color: Color,
    /// Resolution used to convert physical units (mm, in, pt)
    pub dpi: f32,
    /// Default font family for text without one
    pub font_family: String,
    /// Default font size for text without one
    pub font_size: f32,
    /// Default shape anti-aliasing mode
    pub shape_rendering: ShapeRenderingMode,
    /// Load system fonts so `<text>` nodes render
    pub load_system_fonts: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            clear_color: Color::TRANSPARENT,
            dpi: 96.0,
            font_family: "Times New Roman".to_string(),
            font_size: 12.0,
            shape_rendering: ShapeRenderingMode::default(),
            load_system_fonts: false,
        }
    }
}

impl RenderOptions {
    /// Parse options from a TOML string
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load options from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serialize options to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    /// Build the usvg options for decoding
    pub fn to_usvg_options(&self) -> usvg::Options<'static> {
        let mut options = usvg::Options::default();
        options.dpi = self.dpi;
        options.font_family = self.font_family.clone();
        options.font_size = self.font_size;
        options.shape_rendering = self.shape_rendering.into();

        if self.load_system_fonts {
            options.fontdb_mut().load_system_fonts();
        }

        options
    }
}
