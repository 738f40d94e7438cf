// App state and main event loop.
// Maps keyboard and mouse input onto tab selection and panel scrolling.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::prelude::*;

use crate::config::Config;
use crate::error::Result;
use crate::state::{TabId, TabState};
use crate::ui::{self, view::Theme};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Main application state.
pub struct App {
    /// Active tab.
    pub tabs: TabState,
    pub theme: Theme,
    /// Opaque style classification handed over by the host, shown as-is.
    pub class_name: Option<String>,
    pub show_status_bar: bool,
    /// Whether the help overlay is shown.
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
    /// Vertical scroll offset into the active panel.
    pub scroll: u16,
    /// Panel and viewport heights from the last draw, used to clamp scrolling.
    pub(crate) content_height: usize,
    pub(crate) viewport_height: u16,
    /// Where the tab bar was last drawn, for mouse hit-testing.
    pub(crate) tab_bar: Rect,
}

impl App {
    pub fn new(theme: Theme, class_name: Option<String>) -> Self {
        Self {
            tabs: TabState::new(),
            theme,
            class_name,
            show_status_bar: true,
            show_help: false,
            should_quit: false,
            scroll: 0,
            content_height: 0,
            viewport_height: 0,
            tab_bar: Rect::default(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let theme = Theme {
            accent: config.accent_color()?,
        };
        let mut app = Self::new(theme, config.class_name.clone());
        app.show_status_bar = config.show_status_bar;
        Ok(app)
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> Result<()> {
        tracing::info!(tab = ?self.tabs.active_tab(), "section mounted");
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }
        }
        tracing::info!("section unmounted");
        Ok(())
    }

    /// Select a tab. The scroll offset belongs to the old panel and is dropped
    /// only when the tab actually changes.
    pub fn select_tab(&mut self, id: TabId) {
        if self.tabs.select_tab(id) {
            self.scroll = 0;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.show_help = false;
            } else if key.code == KeyCode::Char('q') {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                if self.tabs.select_next() {
                    self.scroll = 0;
                }
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                if self.tabs.select_prev() {
                    self.scroll = 0;
                }
            }
            KeyCode::Char('1') => self.select_tab(TabId::Flow),
            KeyCode::Char('2') => self.select_tab(TabId::Architecture),
            KeyCode::Char('3') => self.select_tab(TabId::Modules),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::PageDown => self.scroll_by(self.page()),
            KeyCode::PageUp => self.scroll_by(-self.page()),
            KeyCode::Home | KeyCode::Char('g') => self.scroll = 0,
            KeyCode::End | KeyCode::Char('G') => self.scroll = self.max_scroll(),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(tab) = ui::tabs::tab_at(mouse.column, mouse.row, self.tab_bar) {
                    self.select_tab(tab);
                }
            }
            MouseEventKind::ScrollDown => self.scroll_by(3),
            MouseEventKind::ScrollUp => self.scroll_by(-3),
            _ => {}
        }
    }

    fn page(&self) -> i32 {
        i32::from(self.viewport_height.saturating_sub(1).max(1))
    }

    pub(crate) fn max_scroll(&self) -> u16 {
        let max = self
            .content_height
            .saturating_sub(usize::from(self.viewport_height));
        u16::try_from(max).unwrap_or(u16::MAX)
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll()));
        self.scroll = next as u16;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEvent};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn scrollable_app() -> App {
        let mut app = App::new(Theme::default(), None);
        app.content_height = 100;
        app.viewport_height = 20;
        app
    }

    #[test]
    fn test_digits_select_tabs() {
        let mut app = App::new(Theme::default(), None);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.tabs.active_tab(), TabId::Modules);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.tabs.active_tab(), TabId::Architecture);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.tabs.active_tab(), TabId::Flow);
    }

    #[test]
    fn test_tab_key_cycles() {
        let mut app = App::new(Theme::default(), None);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.tabs.active_tab(), TabId::Architecture);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.tabs.active_tab(), TabId::Modules);
    }

    #[test]
    fn test_scroll_resets_only_on_change() {
        let mut app = scrollable_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.scroll, 2);

        app.select_tab(TabId::Flow);
        assert_eq!(app.scroll, 2);

        app.select_tab(TabId::Modules);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut app = scrollable_app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.scroll, 0);
        press(&mut app, KeyCode::End);
        assert_eq!(app.scroll, 80);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.scroll, 80);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.scroll, 61);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_help_captures_keys() {
        let mut app = App::new(Theme::default(), None);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.tabs.active_tab(), TabId::Flow);

        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = App::new(Theme::default(), None);
        let mut key = KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert_eq!(app.tabs.active_tab(), TabId::Flow);
    }

    #[test]
    fn test_click_on_tab_title() {
        let mut app = App::new(Theme::default(), None);
        app.tab_bar = Rect::new(0, 3, 80, 2);

        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 20,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.tabs.active_tab(), TabId::Architecture);

        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 20,
            row: 10,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.tabs.active_tab(), TabId::Architecture);
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            class_name: Some("py-16".to_string()),
            show_status_bar: false,
            ..Config::default()
        };
        let app = App::from_config(&config).unwrap();
        assert_eq!(app.class_name.as_deref(), Some("py-16"));
        assert!(!app.show_status_bar);
        assert_eq!(app.tabs.active_tab(), TabId::Flow);
    }
}
