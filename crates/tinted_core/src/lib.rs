//! Tinted Core
//!
//! Foundational types shared by the Tinted crates:
//!
//! - **Color**: RGBA color with the transparent "no tint" sentinel
//! - **Geometry**: points, sizes and rectangles used for layout bounds
//! - **Invalidation**: a shared dirty flag that schedules redraws
//!
//! # Example
//!
//! ```rust
//! use tinted_core::{Color, Invalidator};
//!
//! let invalidator = Invalidator::new();
//! invalidator.invalidate();
//! assert!(invalidator.take());
//! assert!(!invalidator.is_dirty());
//!
//! let tint = Color::from_hex(0xFF0000);
//! assert!(!tint.is_transparent());
//! ```

pub mod color;
pub mod geometry;
pub mod invalidate;

pub use color::{Color, ColorParseError};
pub use geometry::{Point, Rect, Size};
pub use invalidate::{DirtyFlag, Invalidator};
