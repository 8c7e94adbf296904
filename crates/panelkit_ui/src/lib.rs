//! panelkit_ui - widgets for small touch displays
//!
//! Widgets keep their own interaction state and paint through the
//! [`Renderer`] trait, so the same control runs against a TFT driver or the
//! recording [`CommandRenderer`] used for headless runs and tests.

mod callback;
pub mod constants;
mod error;
mod layout;
mod macros;
mod renderer;
mod text_metrics;
mod widget;
pub mod widgets;

pub use callback::Callback;
pub use error::StyleError;
pub use layout::{Point, Rect};
pub use renderer::{Color, CommandRenderer, DrawCommand, FontId, Renderer};
pub use text_metrics::FontMetrics;
pub use widget::{Widget, WidgetBase};

// Re-export widgets
pub use widgets::{combo_box, ComboBox, ComboBoxStyle, ComboItem, LabelStyle};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::layout::{Point, Rect};
    pub use crate::renderer::{Color, FontId, Renderer};
    pub use crate::widget::Widget;
    pub use crate::widgets::{combo_box, ComboBox, ComboBoxStyle, LabelStyle};
}
