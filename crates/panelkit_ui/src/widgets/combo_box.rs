//! Combo box: a one-line control that opens into a scrollable item list.
//!
//! Closed, the control is a header strip showing the selected item next to
//! a square button with an arrow. A press on the header opens the list
//! below it; the control's height grows to cover the visible rows. While
//! open:
//! - a press on a row selects that item and closes the list
//! - a press on the scrollbar track jumps the list to that position
//! - any other press closes the list
//!
//! Closing reports the rectangle the list occupied through the collapse
//! callback, since the control's own bounds no longer cover it and the
//! owner has to repaint whatever was underneath.

use log::{debug, trace};

use crate::callback::Callback;
use crate::callback_setter;
use crate::constants::{COMBO_LABEL_BASELINE_OFFSET, COMBO_NO_SELECTION_TEXT, COMBO_TEXT_PADDING_X};
use crate::error::StyleError;
use crate::layout::{Point, Rect};
use crate::renderer::{Color, Renderer};
use crate::widget::{Widget, WidgetBase};

use super::combo_style::ComboBoxStyle;
use super::scrollbar::{
    calculate_thumb, ensure_visible, needs_scrollbar, offset_from_track_press, point_in_track,
    ScrollbarParams, ScrollbarThumb,
};

/// One entry of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboItem {
    pub text: String,
    pub value: i32,
}

/// Where the parts of the control sit for the current state.
#[derive(Debug, Clone, PartialEq)]
pub struct ComboGeometry {
    /// The always-visible strip at collapsed height
    pub header: Rect,
    /// Left part of the header holding the selected text
    pub text_area: Rect,
    /// Square button at the right end of the header
    pub button: Rect,
    /// Arrow triangle, pointing down when closed and up when open
    pub arrow: [Point; 3],
    /// Present while the list is open
    pub list: Option<ListGeometry>,
}

/// Geometry of the open list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListGeometry {
    /// Area below the header covering the visible rows
    pub bounds: Rect,
    pub rows: Vec<RowGeometry>,
    pub scrollbar: Option<ScrollbarGeometry>,
}

/// One visible row. Rows stop where the scrollbar track starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowGeometry {
    /// Index of the item shown in this row
    pub index: usize,
    pub bounds: Rect,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarGeometry {
    pub track: Rect,
    pub thumb: ScrollbarThumb,
}

/// A drop-down selection control.
pub struct ComboBox {
    base: WidgetBase,
    style: ComboBoxStyle,
    items: Vec<ComboItem>,
    selected: Option<usize>,
    expanded: bool,
    collapsed_height: i32,
    /// Index of the first visible row while expanded
    scroll_offset: usize,
    on_select: Callback<(usize, i32)>,
    on_collapse: Callback<Rect>,
}

impl ComboBox {
    /// Create a closed, empty combo box. `rect.height` is the collapsed
    /// height and stays fixed; the width never changes.
    pub fn new(rect: Rect, label: impl Into<String>, style: ComboBoxStyle) -> Result<Self, StyleError> {
        style.validate(rect)?;
        Ok(Self {
            base: WidgetBase::new(rect, label),
            style,
            items: Vec::new(),
            selected: None,
            expanded: false,
            collapsed_height: rect.height,
            scroll_offset: 0,
            on_select: Callback::none(),
            on_collapse: Callback::none(),
        })
    }

    callback_setter!(set_on_select, on_select, usize, i32);
    callback_setter!(set_on_collapse, on_collapse, Rect);

    // =========================================================================
    // Items
    // =========================================================================

    /// Append an item. The first item added to a combo box without a
    /// selection becomes selected (without firing the select callback).
    pub fn add_item(&mut self, text: impl Into<String>, value: i32) {
        self.items.push(ComboItem {
            text: text.into(),
            value,
        });
        if self.selected.is_none() {
            self.selected = Some(0);
        }
        self.invalidate();
    }

    /// Remove every item. Closes the list first if it is open.
    pub fn clear_items(&mut self) {
        self.collapse();
        self.items.clear();
        self.selected = None;
        self.scroll_offset = 0;
        self.invalidate();
    }

    pub fn items(&self) -> &[ComboItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Select the item at `index` and scroll it into the visible window.
    ///
    /// Out-of-range indices and re-selecting the current item are ignored:
    /// no callback, no repaint.
    pub fn set_selected_index(&mut self, index: usize) {
        let Some(item) = self.items.get(index) else {
            trace!("ignoring out-of-range selection {} of {}", index, self.items.len());
            return;
        };
        if self.selected == Some(index) {
            return;
        }

        let value = item.value;
        self.selected = Some(index);
        self.scroll_offset = ensure_visible(self.scroll_offset, index, self.max_visible());
        debug!("combo '{}' selected {} (value {})", self.base.label, index, value);

        self.on_select.call((index, value));
        self.invalidate();
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected.filter(|&i| i < self.items.len())
    }

    pub fn selected_value(&self) -> Option<i32> {
        self.selected_item().map(|item| item.value)
    }

    /// Text of the selected item, or "No selection".
    pub fn selected_text(&self) -> &str {
        self.selected_item()
            .map(|item| item.text.as_str())
            .unwrap_or(COMBO_NO_SELECTION_TEXT)
    }

    /// Selected index with `-1` for no selection.
    pub fn selected_index_raw(&self) -> i32 {
        self.selected_index()
            .and_then(|i| i32::try_from(i).ok())
            .unwrap_or(-1)
    }

    /// Selected value with `-1` for no selection.
    pub fn selected_value_raw(&self) -> i32 {
        self.selected_value().unwrap_or(-1)
    }

    fn selected_item(&self) -> Option<&ComboItem> {
        self.selected.and_then(|i| self.items.get(i))
    }

    // =========================================================================
    // Expansion
    // =========================================================================

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Close the list if it is open and report the area it covered.
    pub fn collapse(&mut self) {
        if !self.expanded {
            return;
        }
        // Capture before the height shrinks
        let cleared = self.list_rect();
        self.expanded = false;
        self.invalidate();
        debug!("combo '{}' collapsed", self.base.label);
        self.on_collapse.call(cleared);
    }

    fn expand(&mut self) {
        self.expanded = true;
        self.scroll_offset = 0;
        self.invalidate();
        debug!(
            "combo '{}' expanded ({} items, {} visible)",
            self.base.label,
            self.items.len(),
            self.visible_count()
        );
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle a press at display coordinates.
    pub fn handle_press(&mut self, x: i32, y: i32) {
        if !self.base.enabled {
            return;
        }
        let point = Point::new(x, y);

        if self.header_rect().contains(point) {
            if self.expanded {
                self.collapse();
            } else {
                self.expand();
            }
            return;
        }

        if !self.expanded {
            return;
        }

        if let Some(track) = self.scrollbar_track() {
            if point_in_track(point, track) {
                self.scroll_to_press(y, track);
                return;
            }
        }

        let hit = (0..self.max_visible())
            .map(|slot| (slot, self.scroll_offset + slot))
            .take_while(|&(_, index)| index < self.items.len())
            .find(|&(slot, _)| self.row_rect(slot).contains(point))
            .map(|(_, index)| index);

        if let Some(index) = hit {
            self.set_selected_index(index);
        }
        // A row pick and a press anywhere else both close the list
        self.collapse();
    }

    fn scroll_to_press(&mut self, y: i32, track: Rect) {
        let offset = offset_from_track_press(
            y,
            track,
            self.items.len(),
            self.max_visible(),
            self.style.item_height,
        );
        trace!("combo '{}' scrolled {} -> {}", self.base.label, self.scroll_offset, offset);
        self.scroll_offset = offset;
        self.invalidate();
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Rows shown while open: the item count, capped at the style maximum.
    pub fn visible_count(&self) -> usize {
        self.items.len().min(self.max_visible())
    }

    pub fn collapsed_height(&self) -> i32 {
        self.collapsed_height
    }

    pub fn style(&self) -> &ComboBoxStyle {
        &self.style
    }

    pub fn label(&self) -> &str {
        &self.base.label
    }

    /// The header strip at collapsed height.
    pub fn header_rect(&self) -> Rect {
        self.base.rect.with_height(self.collapsed_height)
    }

    /// The area below the header that the open list covers. Computed the
    /// same way whether or not the list is open.
    pub fn list_rect(&self) -> Rect {
        let r = self.base.rect;
        Rect::new(
            r.x,
            r.y + self.collapsed_height,
            r.width,
            self.rows_height(self.visible_count()),
        )
    }

    /// Full snapshot of where everything sits, used for painting.
    pub fn geometry(&self) -> ComboGeometry {
        let header = self.header_rect();
        let button_width = self.collapsed_height;
        let text_area = Rect::new(header.x, header.y, header.width - button_width, header.height);
        let button = Rect::new(text_area.right(), header.y, button_width, header.height);

        ComboGeometry {
            header,
            text_area,
            button,
            arrow: self.arrow_points(button),
            list: self.expanded.then(|| self.list_geometry()),
        }
    }

    fn list_geometry(&self) -> ListGeometry {
        let end = (self.scroll_offset + self.max_visible()).min(self.items.len());
        let rows = (self.scroll_offset..end)
            .enumerate()
            .map(|(slot, index)| RowGeometry {
                index,
                bounds: self.row_rect(slot),
                highlighted: Some(index) == self.selected,
            })
            .collect();

        let scrollbar = self.scrollbar_track().and_then(|track| {
            let params = ScrollbarParams::new(
                self.items.len(),
                self.max_visible(),
                self.scroll_offset,
                track,
            );
            calculate_thumb(&params).map(|thumb| ScrollbarGeometry { track, thumb })
        });

        ListGeometry {
            bounds: self.list_rect(),
            rows,
            scrollbar,
        }
    }

    fn arrow_points(&self, button: Rect) -> [Point; 3] {
        let size = self.style.arrow_size;
        let x = button.x + (button.width - size * 2) / 2;
        let y = button.y + (self.collapsed_height - size) / 2;
        if self.expanded {
            [
                Point::new(x, y + size),
                Point::new(x + size * 2, y + size),
                Point::new(x + size, y),
            ]
        } else {
            [
                Point::new(x, y),
                Point::new(x + size * 2, y),
                Point::new(x + size, y + size),
            ]
        }
    }

    /// Track of the scrollbar, if the list needs one.
    fn scrollbar_track(&self) -> Option<Rect> {
        if !self.has_scrollbar() {
            return None;
        }
        let list = self.list_rect();
        let width = self.style.scroll_bar_width;
        Some(Rect::new(list.right() - width, list.y, width, list.height))
    }

    /// Bounds of visible row `slot`, excluding the scrollbar column.
    fn row_rect(&self, slot: usize) -> Rect {
        let list = self.list_rect();
        let width = if self.has_scrollbar() {
            list.width - self.style.scroll_bar_width
        } else {
            list.width
        };
        Rect::new(
            list.x,
            list.y + self.rows_height(slot),
            width,
            self.style.item_height,
        )
    }

    fn has_scrollbar(&self) -> bool {
        needs_scrollbar(self.items.len(), self.max_visible())
    }

    fn max_visible(&self) -> usize {
        self.style.max_visible_items
    }

    fn rows_height(&self, rows: usize) -> i32 {
        i32::try_from(rows)
            .unwrap_or(i32::MAX)
            .saturating_mul(self.style.item_height)
    }

    /// Height the control occupies in its current state.
    fn derived_height(&self) -> i32 {
        if self.expanded {
            self.collapsed_height + self.rows_height(self.visible_count())
        } else {
            self.collapsed_height
        }
    }

    /// Bring the height in line with the state and request a repaint.
    fn invalidate(&mut self) {
        self.base.rect.height = self.derived_height();
        self.base.mark_dirty();
    }

    // =========================================================================
    // Painting
    // =========================================================================

    fn paint(&self, renderer: &mut dyn Renderer) {
        let geometry = self.geometry();
        let enabled = self.base.enabled;
        let muted = |color: Color, disabled: Color| if enabled { color } else { disabled };

        let style = &self.style;
        let fill = muted(style.background_color, style.disabled_color);
        let button_fill = muted(style.button_color, style.disabled_color);
        let outline = muted(style.outline_color, style.disabled_color);
        let text_color = muted(style.selected_text_style.text_color, style.disabled_text_color);
        let arrow_color = muted(style.arrow_color, style.disabled_text_color);

        self.paint_label(renderer);

        let header = geometry.header;
        renderer.fill_rect(geometry.text_area, fill);
        renderer.fill_rect(geometry.button, button_fill);
        renderer.stroke_rect(header, outline);
        renderer.vertical_line(
            Point::new(geometry.button.x, header.y + 1),
            header.height - 2,
            outline,
        );

        renderer.set_transparent_text(true);
        renderer.set_font(style.selected_text_style.font);
        renderer.set_foreground(text_color);
        let baseline = renderer.font_metrics().centered_baseline(header.y, header.height);
        renderer.set_cursor(Point::new(header.x + COMBO_TEXT_PADDING_X, baseline));
        renderer.print(self.selected_text());

        renderer.fill_triangle(geometry.arrow, arrow_color);

        if let Some(list) = &geometry.list {
            self.paint_list(renderer, list);
            renderer.stroke_rect(list.bounds, outline);
        }
    }

    fn paint_label(&self, renderer: &mut dyn Renderer) {
        if self.base.label.is_empty() {
            return;
        }
        let style = &self.style.label_style;
        renderer.set_transparent_text(true);
        renderer.set_font(style.font);
        renderer.set_foreground(style.text_color);
        let text_height = renderer.font_metrics().text_height();
        let r = self.base.rect;
        renderer.set_cursor(Point::new(
            r.x,
            r.y - text_height + COMBO_LABEL_BASELINE_OFFSET,
        ));
        renderer.print(&self.base.label);
    }

    fn paint_list(&self, renderer: &mut dyn Renderer, list: &ListGeometry) {
        let style = &self.style;
        renderer.fill_rect(list.bounds, style.background_color);
        renderer.set_font(style.item_text_style.font);

        for row in &list.rows {
            let (row_fill, row_text) = if row.highlighted {
                (style.highlight_color, style.item_text_style.bg_color)
            } else {
                (style.background_color, style.item_text_style.text_color)
            };
            let b = row.bounds;
            renderer.fill_rect(Rect::new(b.x + 1, b.y + 1, b.width - 2, b.height - 1), row_fill);

            renderer.set_foreground(row_text);
            let baseline = renderer.font_metrics().centered_baseline(b.y, b.height);
            renderer.set_cursor(Point::new(b.x + COMBO_TEXT_PADDING_X, baseline));
            renderer.print(&self.items[row.index].text);
        }

        if let Some(scrollbar) = &list.scrollbar {
            renderer.fill_rect(scrollbar.track, style.background_color);
            renderer.stroke_rect(scrollbar.track, style.outline_color);
            renderer.fill_rect(scrollbar.thumb.bounds.inset(1), style.scroll_bar_color);
        }
    }
}

impl Widget for ComboBox {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn draw_internal(&self, renderer: &mut dyn Renderer) {
        trace!("painting combo '{}'", self.base.label);
        self.paint(renderer);
    }

    fn handle_press(&mut self, x: i32, y: i32) {
        ComboBox::handle_press(self, x, y);
    }

    fn is_expanded(&self) -> bool {
        ComboBox::is_expanded(self)
    }

    fn collapse(&mut self) {
        ComboBox::collapse(self);
    }
}

/// Helper function to create a combo box with the default style.
pub fn combo_box(rect: Rect, label: impl Into<String>) -> Result<ComboBox, StyleError> {
    ComboBox::new(rect, label, ComboBoxStyle::default())
}
