use anyhow::Result;
use caravel_core::{AppConfig, Carousel, Deck, PointerKind};
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    Frame,
};
use tracing::debug;

use crate::input::{handle_key_event, Action};
use crate::keymap::Keymap;
use crate::surface::TermSurface;
use crate::theme::Theme;
use crate::widgets::{ControlsWidget, HelpWidget, StatusBarWidget, TrackWidget};

/// Width of each previous/next control gutter, in columns.
const CONTROL_WIDTH: u16 = 3;

/// TUI application state: the carousel engine plus everything around it.
pub struct App {
    pub config: AppConfig,
    pub deck: Deck,
    pub carousel: Carousel<TermSurface>,
    pub theme: Theme,
    pub keymap: Keymap,
    pub show_help: bool,
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Rendered areas for mouse hit-testing
    viewport_area: Rect,
    prev_area: Rect,
    next_area: Rect,
    last_viewport_width: Option<u16>,
}

impl App {
    pub fn new(config: AppConfig, deck: Deck) -> Result<Self> {
        let keymap = Keymap::from_config(&config.keymap);
        let carousel = Carousel::new(deck.len(), config.carousel.clone(), TermSurface::new())?;

        Ok(Self {
            config,
            deck,
            carousel,
            theme: Theme::default(),
            keymap,
            show_help: false,
            should_quit: false,
            status_message: Some("Press ? for help".to_string()),
            viewport_area: Rect::default(),
            prev_area: Rect::default(),
            next_area: Rect::default(),
            last_viewport_width: None,
        })
    }

    /// Whether a track transition is running (drives the faster tick).
    pub fn is_animating(&self) -> bool {
        self.carousel.surface().is_animating()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = handle_key_event(key, &self.keymap, self.show_help);
        self.apply_action(action);
    }

    pub fn apply_action(&mut self, action: Action) {
        if action != Action::None {
            self.status_message = None;
        }
        match action {
            Action::Quit => self.should_quit = true,
            Action::Prev => self.carousel.retreat(),
            Action::Next => self.carousel.advance(),
            Action::First => self.carousel.go_to(0, true),
            Action::Last => {
                let last = self.carousel.max_index() as isize;
                self.carousel.go_to(last, true);
            }
            Action::Help => self.show_help = !self.show_help,
            Action::ExitMode => self.show_help = false,
            Action::None => {}
        }
    }

    /// Route mouse input: clicks on the control gutters page the deck,
    /// button-down inside the viewport opens a drag session.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.show_help {
            if matches!(mouse.kind, MouseEventKind::Down(_)) {
                self.show_help = false;
            }
            return;
        }

        let pos = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(button) => {
                if self.prev_area.contains(pos) {
                    if self.carousel.surface().prev_enabled() {
                        self.carousel.retreat();
                    }
                } else if self.next_area.contains(pos) {
                    if self.carousel.surface().next_enabled() {
                        self.carousel.advance();
                    }
                } else if self.viewport_area.contains(pos) {
                    self.carousel.pointer_down(
                        mouse.column as f64,
                        PointerKind::Mouse,
                        button == MouseButton::Left,
                    );
                }
            }
            MouseEventKind::Drag(_) => self.carousel.pointer_move(mouse.column as f64),
            MouseEventKind::Up(_) => self.carousel.pointer_up(),
            _ => {}
        }
    }

    /// React to a terminal resize; the engine clamps the index into the
    /// new range and snaps the track without a transition.
    pub fn handle_resize(&mut self, columns: u16) {
        self.sync_viewport_width(columns.saturating_sub(2 * CONTROL_WIDTH));
    }

    fn sync_viewport_width(&mut self, width: u16) {
        if self.last_viewport_width == Some(width) {
            return;
        }
        debug!(width, "viewport width changed");
        self.last_viewport_width = Some(width);
        self.carousel.surface_mut().set_viewport_width(width);
        self.carousel.handle_resize();
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let (main_area, status_area) = if self.config.ui.status_bar && area.height > 1 {
            let chunks =
                Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(area);
            (chunks[0], Some(chunks[1]))
        } else {
            (area, None)
        };

        let chunks = Layout::horizontal([
            Constraint::Length(CONTROL_WIDTH),
            Constraint::Min(0),
            Constraint::Length(CONTROL_WIDTH),
        ])
        .split(main_area);
        self.prev_area = chunks[0];
        self.viewport_area = chunks[1];
        self.next_area = chunks[2];

        // First frame and any missed resize go through the same path.
        self.sync_viewport_width(self.viewport_area.width);

        let offset_percent = self.carousel.surface_mut().offset_percent();
        let size_percent = self.carousel.surface().slide_size_percent();
        let viewport_columns = self.viewport_area.width as f64;
        let slide_width = ((viewport_columns * size_percent / 100.0).round() as u16).max(1);
        let offset_columns = (offset_percent / 100.0 * viewport_columns).round() as i32;

        frame.render_widget(
            TrackWidget::new(
                &self.deck,
                self.carousel.current_index(),
                self.carousel.slides_to_show(),
                slide_width,
                offset_columns,
                &self.theme,
            ),
            self.viewport_area,
        );

        ControlsWidget::render(
            frame,
            self.prev_area,
            "\u{2039}",
            self.carousel.surface().prev_enabled(),
            &self.theme,
        );
        ControlsWidget::render(
            frame,
            self.next_area,
            "\u{203a}",
            self.carousel.surface().next_enabled(),
            &self.theme,
        );

        if let Some(status_area) = status_area {
            StatusBarWidget::render(frame, status_area, self);
        }

        if self.show_help {
            HelpWidget::render(frame, &self.config.keymap, &self.theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caravel_core::config::Breakpoint;
    use crossterm::event::KeyModifiers;

    fn app_with(config: AppConfig, slides: usize) -> App {
        let deck = Deck {
            title: None,
            slides: (0..slides)
                .map(|i| caravel_core::deck::Slide {
                    title: format!("s{i}"),
                    body: String::new(),
                })
                .collect(),
        };
        App::new(config, deck).unwrap()
    }

    #[test]
    fn test_actions_navigate() {
        let mut app = app_with(AppConfig::default(), 5);
        app.apply_action(Action::Next);
        assert_eq!(app.carousel.current_index(), 1);
        app.apply_action(Action::Last);
        assert_eq!(app.carousel.current_index(), 4);
        app.apply_action(Action::Prev);
        assert_eq!(app.carousel.current_index(), 3);
        app.apply_action(Action::First);
        assert_eq!(app.carousel.current_index(), 0);
    }

    #[test]
    fn test_quit_and_help_actions() {
        let mut app = app_with(AppConfig::default(), 2);
        app.apply_action(Action::Help);
        assert!(app.show_help);
        app.apply_action(Action::ExitMode);
        assert!(!app.show_help);
        app.apply_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_swallows_navigation_keys() {
        let mut app = app_with(AppConfig::default(), 5);
        app.apply_action(Action::Help);
        app.handle_key(KeyEvent::new(
            crossterm::event::KeyCode::Right,
            KeyModifiers::NONE,
        ));
        assert!(!app.show_help);
        assert_eq!(app.carousel.current_index(), 0);
    }

    #[test]
    fn test_resize_applies_breakpoints() {
        let mut config = AppConfig::default();
        config.carousel.breakpoints = vec![Breakpoint {
            width: 100,
            slides_to_show: Some(2),
            step: None,
        }];
        let mut app = app_with(config, 6);

        app.handle_resize(80);
        assert_eq!(app.carousel.slides_to_show(), 1);

        // 120 terminal columns leave 114 viewport columns.
        app.handle_resize(120);
        assert_eq!(app.carousel.slides_to_show(), 2);
    }

    #[test]
    fn test_control_clicks() {
        let mut app = app_with(AppConfig::default(), 5);
        app.handle_resize(80);
        app.prev_area = Rect::new(0, 0, 3, 10);
        app.next_area = Rect::new(77, 0, 3, 10);
        app.viewport_area = Rect::new(3, 0, 74, 10);

        let click = |col, row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        };

        app.handle_mouse(click(78, 5));
        assert_eq!(app.carousel.current_index(), 1);

        // Prev at the left bound is disabled and ignored; after advancing
        // it works again.
        app.apply_action(Action::First);
        app.handle_mouse(click(1, 5));
        assert_eq!(app.carousel.current_index(), 0);
        app.apply_action(Action::Next);
        app.handle_mouse(click(1, 5));
        assert_eq!(app.carousel.current_index(), 0);
    }

    #[test]
    fn test_mouse_drag_in_viewport() {
        let mut app = app_with(AppConfig::default(), 5);
        app.handle_resize(106); // 100-column viewport
        app.viewport_area = Rect::new(3, 0, 100, 10);

        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 60,
            row: 5,
            modifiers: KeyModifiers::NONE,
        });
        assert!(app.carousel.is_dragging());

        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Left),
            column: 30,
            row: 5,
            modifiers: KeyModifiers::NONE,
        });
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 30,
            row: 5,
            modifiers: KeyModifiers::NONE,
        });
        assert!(!app.carousel.is_dragging());
        assert_eq!(app.carousel.current_index(), 1);
    }
}
