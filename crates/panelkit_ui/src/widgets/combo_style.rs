//! Appearance and sizing configuration for [`ComboBox`](super::ComboBox).
//!
//! A style is a plain value. The combo box copies it at construction and
//! never reads the caller's copy again, so one style can be shared as a
//! template between several controls.

use serde::{Deserialize, Serialize};

use crate::builder_field;
use crate::constants::{
    COMBO_ARROW_SIZE, COMBO_ITEM_HEIGHT, COMBO_MAX_VISIBLE_ITEMS, DISABLED_FILL, DISABLED_TEXT,
    SCROLLBAR_WIDTH,
};
use crate::error::StyleError;
use crate::layout::Rect;
use crate::renderer::{Color, FontId};

/// Font and colors for one run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    pub font: FontId,
    pub text_color: Color,
    /// Background paired with `text_color`; highlighted rows swap the two
    pub bg_color: Color,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font: FontId::default(),
            text_color: Color::WHITE,
            bg_color: Color::BLACK,
        }
    }
}

impl LabelStyle {
    pub fn new(font: FontId, text_color: Color, bg_color: Color) -> Self {
        Self {
            font,
            text_color,
            bg_color,
        }
    }
}

/// Configuration for combo box appearance and list sizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboBoxStyle {
    /// Caption drawn above the control
    pub label_style: LabelStyle,
    /// Selected item text inside the closed box
    pub selected_text_style: LabelStyle,
    /// Rows of the expanded list
    pub item_text_style: LabelStyle,

    pub background_color: Color,
    pub outline_color: Color,
    pub button_color: Color,
    pub arrow_color: Color,
    /// Row background of the selected item in the list
    pub highlight_color: Color,
    pub scroll_bar_color: Color,
    /// Surfaces and outline while disabled
    pub disabled_color: Color,
    /// Text and arrow while disabled
    pub disabled_text_color: Color,

    /// Height of one list row
    pub item_height: i32,
    /// Half-width of the arrow triangle, also its height
    pub arrow_size: i32,
    /// Rows shown before a scrollbar appears
    pub max_visible_items: usize,
    pub scroll_bar_width: i32,
}

impl Default for ComboBoxStyle {
    fn default() -> Self {
        Self {
            label_style: LabelStyle::default(),
            selected_text_style: LabelStyle::default(),
            item_text_style: LabelStyle::default(),
            background_color: Color::BLACK,
            outline_color: Color::WHITE,
            button_color: Color::DARK_GREY,
            arrow_color: Color::WHITE,
            highlight_color: Color::BLUE,
            scroll_bar_color: Color::LIGHT_GREY,
            disabled_color: DISABLED_FILL,
            disabled_text_color: DISABLED_TEXT,
            item_height: COMBO_ITEM_HEIGHT,
            arrow_size: COMBO_ARROW_SIZE,
            max_visible_items: COMBO_MAX_VISIBLE_ITEMS,
            scroll_bar_width: SCROLLBAR_WIDTH,
        }
    }
}

impl ComboBoxStyle {
    /// Create a new style with default values.
    pub fn new() -> Self {
        Self::default()
    }

    builder_field!(label_style, LabelStyle);
    builder_field!(selected_text_style, LabelStyle);
    builder_field!(item_text_style, LabelStyle);
    builder_field!(background_color, Color);
    builder_field!(outline_color, Color);
    builder_field!(button_color, Color);
    builder_field!(arrow_color, Color);
    builder_field!(highlight_color, Color);
    builder_field!(scroll_bar_color, Color);
    builder_field!(disabled_color, Color);
    builder_field!(disabled_text_color, Color);
    builder_field!(item_height, i32);
    builder_field!(arrow_size, i32);
    builder_field!(max_visible_items, usize);
    builder_field!(scroll_bar_width, i32);
    builder_field!(item_font, item_text_style.font, FontId);
    builder_field!(selected_font, selected_text_style.font, FontId);

    /// Check that this style can lay out a control occupying `rect`
    /// (at its collapsed height).
    pub fn validate(&self, rect: Rect) -> Result<(), StyleError> {
        if rect.width <= 0 || rect.height <= 0 {
            return Err(StyleError::NonPositiveSize {
                width: rect.width,
                height: rect.height,
            });
        }
        if self.item_height <= 0 {
            return Err(StyleError::NonPositiveItemHeight(self.item_height));
        }
        if self.max_visible_items == 0 {
            return Err(StyleError::NoVisibleItems);
        }
        if self.scroll_bar_width < 0 || self.scroll_bar_width >= rect.width {
            return Err(StyleError::ScrollBarTooWide {
                scroll_bar_width: self.scroll_bar_width,
                width: rect.width,
            });
        }
        if self.arrow_size < 0 {
            return Err(StyleError::NegativeArrowSize(self.arrow_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let style = ComboBoxStyle::default();
        assert_eq!(style.item_height, 30);
        assert_eq!(style.arrow_size, 5);
        assert_eq!(style.max_visible_items, 3);
        assert_eq!(style.scroll_bar_width, 10);
        assert_eq!(style.highlight_color, Color::BLUE);
    }

    #[test]
    fn test_builder() {
        let style = ComboBoxStyle::new()
            .item_height(24)
            .max_visible_items(5)
            .item_font(FontId(2))
            .highlight_color(Color::GREEN);
        assert_eq!(style.item_height, 24);
        assert_eq!(style.max_visible_items, 5);
        assert_eq!(style.item_text_style.font, FontId(2));
        assert_eq!(style.selected_text_style.font, FontId(0));
        assert_eq!(style.highlight_color, Color::GREEN);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        let rect = Rect::new(0, 0, 200, 30);
        assert_eq!(ComboBoxStyle::default().validate(rect), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let rect = Rect::new(0, 0, 200, 30);
        assert_eq!(
            ComboBoxStyle::new().item_height(0).validate(rect),
            Err(StyleError::NonPositiveItemHeight(0))
        );
        assert_eq!(
            ComboBoxStyle::new().max_visible_items(0).validate(rect),
            Err(StyleError::NoVisibleItems)
        );
        assert_eq!(
            ComboBoxStyle::new().scroll_bar_width(200).validate(rect),
            Err(StyleError::ScrollBarTooWide {
                scroll_bar_width: 200,
                width: 200
            })
        );
        assert_eq!(
            ComboBoxStyle::new().arrow_size(-1).validate(rect),
            Err(StyleError::NegativeArrowSize(-1))
        );
        assert_eq!(
            ComboBoxStyle::new().validate(Rect::new(0, 0, 200, 0)),
            Err(StyleError::NonPositiveSize {
                width: 200,
                height: 0
            })
        );
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let style: ComboBoxStyle =
            serde_json::from_str(r#"{ "item_height": 22, "highlight_color": 2016 }"#).unwrap();
        assert_eq!(style.item_height, 22);
        assert_eq!(style.highlight_color, Color::GREEN);
        assert_eq!(style.max_visible_items, 3);
        assert_eq!(style.outline_color, Color::WHITE);
    }
}
