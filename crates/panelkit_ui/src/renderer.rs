use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::layout::{Point, Rect};
use crate::text_metrics::FontMetrics;

/// A 16-bit RGB565 display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xFFFF);
    pub const BLUE: Color = Color(0x001F);
    pub const RED: Color = Color(0xF800);
    pub const GREEN: Color = Color(0x07E0);
    pub const DARK_GREY: Color = Color(0x7BEF);
    pub const LIGHT_GREY: Color = Color(0xD69A);

    /// Pack 8-bit channels into RGB565.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color((((r as u16) & 0xF8) << 8) | (((g as u16) & 0xFC) << 3) | ((b as u16) >> 3))
    }

    pub fn raw(self) -> u16 {
        self.0
    }
}

/// Handle for a font known to the text backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontId(pub u16);

/// The drawing surface a widget paints onto.
///
/// Text calls follow a cursor model: set font, colors and cursor, then
/// `print`. The cursor y is the text baseline. Primitive calls are
/// stateless.
pub trait Renderer {
    fn set_font(&mut self, font: FontId);
    fn set_foreground(&mut self, color: Color);
    fn set_background(&mut self, color: Color);
    /// `true` draws glyphs without filling their background.
    fn set_transparent_text(&mut self, transparent: bool);
    fn set_cursor(&mut self, position: Point);
    fn print(&mut self, text: &str);
    /// Ascent of the active font in pixels (positive).
    fn font_ascent(&self) -> i32;
    /// Descent of the active font in pixels (zero or negative).
    fn font_descent(&self) -> i32;

    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, color: Color);
    fn vertical_line(&mut self, top: Point, length: i32, color: Color);
    fn fill_triangle(&mut self, points: [Point; 3], color: Color);

    /// Metrics of the active font.
    fn font_metrics(&self) -> FontMetrics {
        FontMetrics::new(self.font_ascent(), self.font_descent())
    }
}

/// A draw command recorded by [`CommandRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
    },
    VerticalLine {
        top: Point,
        length: i32,
        color: Color,
    },
    FillTriangle {
        points: [Point; 3],
        color: Color,
    },
    DrawText {
        text: String,
        position: Point,
        font: FontId,
        color: Color,
        transparent: bool,
    },
}

/// A renderer that records draw commands instead of touching a display.
///
/// Used by the headless driver and by tests. Text state (font, colors,
/// cursor) is tracked the way a real text backend tracks it, and folded into
/// each [`DrawCommand::DrawText`] at print time.
#[derive(Debug, Clone, Default)]
pub struct CommandRenderer {
    draw_commands: Vec<DrawCommand>,
    font_metrics: HashMap<FontId, FontMetrics>,
    default_metrics: FontMetrics,
    font: FontId,
    foreground: Color,
    background: Color,
    transparent: bool,
    cursor: Point,
}

impl CommandRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register metrics for a font. Unregistered fonts use the default metrics.
    pub fn with_font_metrics(mut self, font: FontId, metrics: FontMetrics) -> Self {
        self.font_metrics.insert(font, metrics);
        self
    }

    /// Metrics used for fonts without an explicit entry.
    pub fn with_default_metrics(mut self, metrics: FontMetrics) -> Self {
        self.default_metrics = metrics;
        self
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.draw_commands
    }

    /// Drain the recorded commands, e.g. once per frame.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.draw_commands)
    }

    pub fn clear(&mut self) {
        self.draw_commands.clear();
    }

    /// Strings printed so far, in order.
    pub fn printed_text(&self) -> Vec<&str> {
        self.draw_commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::DrawText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn active_metrics(&self) -> FontMetrics {
        self.font_metrics
            .get(&self.font)
            .copied()
            .unwrap_or(self.default_metrics)
    }
}

impl Renderer for CommandRenderer {
    fn set_font(&mut self, font: FontId) {
        self.font = font;
    }

    fn set_foreground(&mut self, color: Color) {
        self.foreground = color;
    }

    fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    fn set_transparent_text(&mut self, transparent: bool) {
        self.transparent = transparent;
    }

    fn set_cursor(&mut self, position: Point) {
        self.cursor = position;
    }

    fn print(&mut self, text: &str) {
        self.draw_commands.push(DrawCommand::DrawText {
            text: text.to_string(),
            position: self.cursor,
            font: self.font,
            color: self.foreground,
            transparent: self.transparent,
        });
        let advance = self.active_metrics().advance(text);
        self.cursor.x += advance;
    }

    fn font_ascent(&self) -> i32 {
        self.active_metrics().ascent
    }

    fn font_descent(&self) -> i32 {
        self.active_metrics().descent
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.draw_commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.draw_commands.push(DrawCommand::StrokeRect { rect, color });
    }

    fn vertical_line(&mut self, top: Point, length: i32, color: Color) {
        self.draw_commands.push(DrawCommand::VerticalLine { top, length, color });
    }

    fn fill_triangle(&mut self, points: [Point; 3], color: Color) {
        self.draw_commands.push(DrawCommand::FillTriangle { points, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb565_packing() {
        assert_eq!(Color::rgb(255, 255, 255), Color::WHITE);
        assert_eq!(Color::rgb(0, 0, 255), Color::BLUE);
        assert_eq!(Color::rgb(255, 0, 0), Color::RED);
    }

    #[test]
    fn test_print_records_text_state() {
        let mut r = CommandRenderer::new();
        r.set_font(FontId(3));
        r.set_foreground(Color::RED);
        r.set_transparent_text(true);
        r.set_cursor(Point::new(4, 20));
        r.print("abc");

        assert_eq!(
            r.commands(),
            &[DrawCommand::DrawText {
                text: "abc".to_string(),
                position: Point::new(4, 20),
                font: FontId(3),
                color: Color::RED,
                transparent: true,
            }]
        );
        assert_eq!(r.printed_text(), vec!["abc"]);
    }

    #[test]
    fn test_metrics_per_font() {
        let mut r = CommandRenderer::new()
            .with_default_metrics(FontMetrics::new(10, -2))
            .with_font_metrics(FontId(1), FontMetrics::new(14, -4));
        assert_eq!(r.font_ascent(), 10);
        r.set_font(FontId(1));
        assert_eq!(r.font_ascent(), 14);
        assert_eq!(r.font_descent(), -4);
        assert_eq!(r.font_metrics().text_height(), 18);
    }

    #[test]
    fn test_take_commands_drains() {
        let mut r = CommandRenderer::new();
        r.fill_rect(Rect::new(0, 0, 1, 1), Color::BLACK);
        assert_eq!(r.take_commands().len(), 1);
        assert!(r.commands().is_empty());
    }
}
