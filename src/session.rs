//! Headless session: one combo box on a recording display.
//!
//! Mirrors what a device main loop does each tick: route a press to the
//! widget, react to its callbacks, then paint. When the list closes, the
//! owner erases the area the list covered and forces a full repaint of the
//! control, since nothing else on this screen would redraw that region.

use std::cell::RefCell;
use std::rc::Rc;

use panelkit_ui::{Color, ComboBox, CommandRenderer, DrawCommand, Point, Rect, Renderer, Widget};

use crate::config::{AppConfig, ConfigError};

/// Something the combo box reported through its callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Selected { index: usize, value: i32 },
    Collapsed(Rect),
}

/// What happened during one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// The press routed this tick, if any
    pub press: Option<Point>,
    pub events: Vec<SessionEvent>,
    /// Whether the widget painted
    pub painted: bool,
    pub commands: Vec<DrawCommand>,
    pub expanded: bool,
    pub selected: Option<usize>,
    pub scroll_offset: usize,
}

pub struct Session {
    combo: ComboBox,
    renderer: CommandRenderer,
    events: Rc<RefCell<Vec<SessionEvent>>>,
    screen_background: Color,
}

impl Session {
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let mut combo = config.build_combo_box()?;
        let events = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&events);
        combo.set_on_select(move |index, value| {
            sink.borrow_mut().push(SessionEvent::Selected { index, value });
        });
        let sink = Rc::clone(&events);
        combo.set_on_collapse(move |cleared| {
            sink.borrow_mut().push(SessionEvent::Collapsed(cleared));
        });

        Ok(Self {
            combo,
            renderer: CommandRenderer::new(),
            events,
            screen_background: config.screen_background,
        })
    }

    pub fn combo(&self) -> &ComboBox {
        &self.combo
    }

    /// Paint without input, as on the first frame after boot.
    pub fn idle(&mut self) -> FrameReport {
        self.tick(None)
    }

    pub fn press(&mut self, point: Point) -> FrameReport {
        self.tick(Some(point))
    }

    /// Replay every press in order.
    pub fn run(&mut self, presses: &[Point]) -> Vec<FrameReport> {
        presses.iter().map(|&p| self.press(p)).collect()
    }

    fn tick(&mut self, press: Option<Point>) -> FrameReport {
        if let Some(p) = press {
            self.combo.handle_press(p.x, p.y);
        }

        let events: Vec<SessionEvent> = self.events.borrow_mut().drain(..).collect();
        let mut force = false;
        for event in &events {
            if let SessionEvent::Collapsed(cleared) = event {
                self.renderer.fill_rect(*cleared, self.screen_background);
                force = true;
            }
        }

        let painted = self.combo.draw(&mut self.renderer, force);
        FrameReport {
            press,
            events,
            painted,
            commands: self.renderer.take_commands(),
            expanded: self.combo.is_expanded(),
            selected: self.combo.selected_index(),
            scroll_offset: self.combo.scroll_offset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_script() {
        let config = AppConfig::default();
        let mut session = Session::from_config(&config).unwrap();

        let boot = session.idle();
        assert!(boot.painted);
        assert_eq!(boot.selected, Some(0));

        let frames = session.run(&config.presses);
        assert_eq!(frames.len(), 4);

        // open
        assert!(frames[0].expanded);
        assert_eq!(frames[0].scroll_offset, 0);
        // scrollbar press near the bottom jumps to the end
        assert!(frames[1].expanded);
        assert_eq!(frames[1].scroll_offset, 2);
        // last visible row picked: item 4
        assert!(!frames[2].expanded);
        assert_eq!(frames[2].selected, Some(4));
        assert_eq!(
            frames[2].events,
            vec![
                SessionEvent::Selected { index: 4, value: 115200 },
                SessionEvent::Collapsed(Rect::new(20, 70, 200, 90)),
            ]
        );
        // reopening resets the scroll position
        assert!(frames[3].expanded);
        assert_eq!(frames[3].scroll_offset, 0);
    }

    #[test]
    fn test_collapse_erases_list_area_first() {
        let config = AppConfig::default();
        let mut session = Session::from_config(&config).unwrap();
        session.idle();
        session.press(Point::new(30, 50));

        let frame = session.press(Point::new(30, 50));
        assert_eq!(
            frame.commands.first(),
            Some(&DrawCommand::FillRect {
                rect: Rect::new(20, 70, 200, 90),
                color: Color::BLACK
            })
        );
        assert!(frame.painted);
    }

    #[test]
    fn test_idle_frame_paints_nothing_when_clean() {
        let mut session = Session::from_config(&AppConfig::default()).unwrap();
        session.idle();
        let frame = session.idle();
        assert!(!frame.painted);
        assert!(frame.commands.is_empty());
    }

    #[test]
    fn test_disabled_session_ignores_presses() {
        let mut config = AppConfig::default();
        config.enabled = false;
        let mut session = Session::from_config(&config).unwrap();
        session.idle();
        let frame = session.press(Point::new(30, 50));
        assert!(!frame.expanded);
        assert!(!frame.painted);
    }
}
