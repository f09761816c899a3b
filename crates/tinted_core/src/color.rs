//! RGBA colors
//!
//! [`Color::TRANSPARENT`] doubles as the "no tint" sentinel: a view whose tint
//! equals it draws the picture with its own colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing a hex color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Wrong number of hex digits
    #[error("invalid color length in '{0}': expected #RRGGBB or #RRGGBBAA")]
    Length(String),

    /// Non-hex character
    #[error("invalid hex digits in color '{0}'")]
    Digits(String),
}

/// RGBA color with components in `0.0..=1.0` (straight alpha)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Opaque color from `0xRRGGBB`
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional)
    pub fn from_hex_str(s: &str) -> Result<Self, ColorParseError> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::Length(s.to_string()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::Digits(s.to_string()));
        }

        let value =
            u32::from_str_radix(digits, 16).map_err(|_| ColorParseError::Digits(s.to_string()))?;

        let (rgb, a) = if digits.len() == 8 {
            (value >> 8, (value & 0xFF) as u8)
        } else {
            (value, 0xFF)
        };

        Ok(Self::rgba8(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
            a,
        ))
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Components quantized to 8 bits, clamped
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// True only for the exact [`Color::TRANSPARENT`] sentinel
    ///
    /// Other fully transparent colors (e.g. `rgba(1, 0, 0, 0)`) are still
    /// considered a tint.
    pub fn is_transparent(&self) -> bool {
        *self == Self::TRANSPARENT
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_str(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex_str(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb_and_rgba() {
        assert_eq!(Color::from_hex_str("#FF0000").unwrap(), Color::RED);
        assert_eq!(Color::from_hex_str("00000000").unwrap(), Color::TRANSPARENT);

        let half = Color::from_hex_str("#0000FF80").unwrap();
        assert_eq!(half.b, 1.0);
        assert!((half.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Color::from_hex_str("#FFF"),
            Err(ColorParseError::Length(_))
        ));
        assert!(matches!(
            Color::from_hex_str("#GG0000"),
            Err(ColorParseError::Digits(_))
        ));
    }

    #[test]
    fn test_parse_rejects_signs() {
        for input in ["#+FFFFF", "-FFFFF", "#+FFFFFFF"] {
            assert!(
                matches!(Color::from_hex_str(input), Err(ColorParseError::Digits(_))),
                "accepted {}",
                input
            );
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let color = Color::rgba8(0x12, 0x34, 0x56, 0x78);
        assert_eq!(color.to_string(), "#12345678");
        assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
    }

    #[test]
    fn test_sentinel_is_exact() {
        assert!(Color::TRANSPARENT.is_transparent());
        assert!(Color::default().is_transparent());
        assert!(!Color::RED.with_alpha(0.0).is_transparent());
        assert!(!Color::BLACK.is_transparent());
    }

    #[test]
    fn test_serde_as_hex_string() {
        #[derive(Deserialize)]
        struct Doc {
            tint: Color,
        }

        let doc: Doc = toml::from_str(r##"tint = "#00FF00""##).unwrap();
        assert_eq!(doc.tint, Color::GREEN);

        let bad: Result<Doc, _> = toml::from_str(r#"tint = "green""#);
        assert!(bad.is_err());
    }
}
