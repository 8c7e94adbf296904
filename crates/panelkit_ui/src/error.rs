//! Error types for panelkit_ui.

use thiserror::Error;

/// Reasons a style cannot be used with a given control rectangle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("item height must be positive, got {0}")]
    NonPositiveItemHeight(i32),

    #[error("max visible items must be at least 1")]
    NoVisibleItems,

    #[error("control size must be positive, got {width}x{height}")]
    NonPositiveSize { width: i32, height: i32 },

    #[error("scrollbar width {scroll_bar_width} does not fit in control width {width}")]
    ScrollBarTooWide { scroll_bar_width: i32, width: i32 },

    #[error("arrow size must not be negative, got {0}")]
    NegativeArrowSize(i32),
}
