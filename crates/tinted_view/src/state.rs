//! View state

use tinted_core::Color;

/// The two observable properties of a [`TintableSvgView`](crate::TintableSvgView)
///
/// Values are immutable: every change produces a new state, and the view
/// repaints from whatever state is current at paint time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    resource_name: Option<String>,
    tint_color: Color,
}

impl ViewState {
    /// No resource, no tint
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource_name(mut self, name: impl Into<String>) -> Self {
        self.resource_name = Some(name.into());
        self
    }

    pub fn without_resource_name(mut self) -> Self {
        self.resource_name = None;
        self
    }

    pub fn with_tint_color(mut self, color: Color) -> Self {
        self.tint_color = color;
        self
    }

    /// The logical resource name, `None` when unset or empty
    pub fn resource_name(&self) -> Option<&str> {
        self.resource_name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn tint_color(&self) -> Color {
        self.tint_color
    }

    /// Whether paints go through the tint filter
    pub fn is_tinted(&self) -> bool {
        !self.tint_color.is_transparent()
    }
}
