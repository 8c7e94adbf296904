//! Centralized constants for panelkit_ui
//!
//! Magic numbers shared by the widgets live here.

use crate::renderer::Color;

// =============================================================================
// Combo Box
// =============================================================================

/// Horizontal inset of item and selected text from the left edge
pub const COMBO_TEXT_PADDING_X: i32 = 10;

/// Distance from the label baseline down to the top of the control,
/// added to the label's raised position above the box
pub const COMBO_LABEL_BASELINE_OFFSET: i32 = 12;

/// Text shown in the header when nothing is selected
pub const COMBO_NO_SELECTION_TEXT: &str = "No selection";

/// Default row height in the expanded list
pub const COMBO_ITEM_HEIGHT: i32 = 30;

/// Default arrow half-width (the triangle is twice this wide)
pub const COMBO_ARROW_SIZE: i32 = 5;

/// Default number of rows shown before scrolling
pub const COMBO_MAX_VISIBLE_ITEMS: usize = 3;

// =============================================================================
// Scrollbar
// =============================================================================

/// Default scrollbar width
pub const SCROLLBAR_WIDTH: i32 = 10;

/// Minimum scrollbar thumb height, keeps the thumb visible on long lists
pub const SCROLLBAR_MIN_THUMB: i32 = 10;

// =============================================================================
// Colors
// =============================================================================

/// Fill used for a disabled control's surfaces and outline
pub const DISABLED_FILL: Color = Color::DARK_GREY;

/// Foreground used for a disabled control's text and arrow
pub const DISABLED_TEXT: Color = Color::LIGHT_GREY;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_are_positive() {
        assert!(COMBO_TEXT_PADDING_X > 0);
        assert!(COMBO_ITEM_HEIGHT > 0);
        assert!(COMBO_MAX_VISIBLE_ITEMS > 0);
        assert!(SCROLLBAR_WIDTH > 0);
        assert!(SCROLLBAR_MIN_THUMB > 0);
    }

    #[test]
    fn test_disabled_colors_differ() {
        assert_ne!(DISABLED_FILL, DISABLED_TEXT);
    }
}
