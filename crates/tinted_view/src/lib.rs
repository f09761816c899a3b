//! Tintable SVG view
//!
//! [`TintableSvgView`] draws one SVG resource from the registered asset
//! catalog onto a surface sized to its layout bounds. The picture is fit with
//! its aspect ratio preserved, centered, and optionally recolored with a solid
//! tint.
//!
//! # Example
//!
//! ```rust
//! use tinted_assets::{AssetRegistry, MemoryCatalog};
//! use tinted_core::Color;
//! use tinted_view::{PaintOutcome, TintableSvgView};
//!
//! let registry = AssetRegistry::new();
//! registry.register(MemoryCatalog::new("app").with(
//!     "app.icons.dot.svg",
//!     br#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10">
//!         <circle cx="5" cy="5" r="5"/>
//!     </svg>"#.to_vec(),
//! ));
//!
//! let mut view = TintableSvgView::new(registry);
//! view.resize(40, 20);
//! view.set_resource_name("dot.svg");
//! view.set_tint_color(Color::RED);
//!
//! // The host's paint pass repaints because the setters invalidated the view.
//! let outcome = view.on_paint_pass().unwrap();
//! assert!(matches!(outcome, Some(PaintOutcome::Drawn(_))));
//! assert!(!view.is_dirty());
//! ```

mod error;
mod state;
mod view;

pub use error::{PaintError, ViewError};
pub use state::ViewState;
pub use view::{PaintOutcome, TintableSvgView};
