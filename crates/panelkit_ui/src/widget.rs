//! Widget trait and the state every widget shares

use crate::layout::{Point, Rect};
use crate::renderer::Renderer;

/// State shared by all widgets: placement, enabled flag, label text and
/// the dirty flag that asks the owner for a repaint.
#[derive(Debug, Clone)]
pub struct WidgetBase {
    /// Current bounds. Widgets may change the height as they change state.
    pub rect: Rect,
    pub enabled: bool,
    pub label: String,
    dirty: bool,
}

impl WidgetBase {
    /// A new widget starts dirty so its first frame is painted.
    pub fn new(rect: Rect, label: impl Into<String>) -> Self {
        Self {
            rect,
            enabled: true,
            label: label.into(),
            dirty: true,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

/// The core widget trait that all controls implement
///
/// Owners route presses with [`Widget::handle_press`] and paint every frame
/// with [`Widget::draw`]. Painting reads widget state only; the one thing it
/// changes is the dirty flag.
pub trait Widget {
    fn base(&self) -> &WidgetBase;

    fn base_mut(&mut self) -> &mut WidgetBase;

    /// Paint the widget unconditionally.
    fn draw_internal(&self, renderer: &mut dyn Renderer);

    /// Handle a press at display coordinates.
    fn handle_press(&mut self, x: i32, y: i32);

    /// Whether the widget currently extends beyond its resting bounds
    /// (an open list, a menu).
    fn is_expanded(&self) -> bool {
        false
    }

    /// Return to the resting state. No-op for widgets that never expand.
    fn collapse(&mut self) {}

    /// Paint if something changed since the last paint, or if `force` is set.
    /// Returns whether anything was painted.
    fn draw(&mut self, renderer: &mut dyn Renderer, force: bool) -> bool {
        if !force && !self.base().is_dirty() {
            return false;
        }
        self.draw_internal(renderer);
        self.base_mut().clear_dirty();
        true
    }

    fn bounds(&self) -> Rect {
        self.base().rect
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        self.base().rect.contains(Point::new(x, y))
    }

    fn is_enabled(&self) -> bool {
        self.base().enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        let base = self.base_mut();
        if base.enabled != enabled {
            base.enabled = enabled;
            base.mark_dirty();
        }
    }

    fn is_dirty(&self) -> bool {
        self.base().is_dirty()
    }
}
