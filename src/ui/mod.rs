// UI module for rendering the TUI.
// Draws the header, tab bar, active panel, status bar, and help overlay.

mod architecture;
mod flow;
mod modules;
pub mod tabs;
pub mod view;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::content::{self, BUYER_JOURNEY, SELLER_JOURNEY};
use crate::state::TabId;

use view::Node;

/// The visual tree of one tab.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub tab: TabId,
    pub root: Node,
}

/// Build the panel for `tab` from the static datasets.
pub fn render_panel(tab: TabId) -> Panel {
    let root = match tab {
        TabId::Flow => flow::panel(
            &content::FLOW_STEPS,
            &content::CANCEL_PATH,
            [&BUYER_JOURNEY, &SELLER_JOURNEY],
        ),
        TabId::Architecture => architecture::panel(&content::LAYERS, &content::EVENTS_FLOW),
        TabId::Modules => modules::panel(
            &content::MODULES,
            &content::INTERACTION_TIERS,
            content::INTERACTION_NOTE,
        ),
    };
    Panel { tab, root }
}

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(2), // Tab bar
            Constraint::Min(1),    // Panel
            Constraint::Length(if app.show_status_bar { 1 } else { 0 }),
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);

    app.tab_bar = chunks[1];
    tabs::draw_tabs(frame, app, chunks[1]);

    draw_panel(frame, app, chunks[2]);

    if app.show_status_bar {
        draw_status_bar(frame, app, chunks[3]);
    }

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = vec![
        Line::from(Span::styled(
            content::TITLE,
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            content::SUBTITLE,
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(header)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Draw the active panel with the current scroll offset.
fn draw_panel(frame: &mut Frame, app: &mut App, area: Rect) {
    let inner = area.inner(Margin {
        horizontal: 1,
        vertical: 0,
    });
    let panel = render_panel(app.tabs.active_tab());
    let lines = panel.root.lines(usize::from(inner.width), &app.theme);

    app.content_height = lines.len();
    app.viewport_height = inner.height;
    app.scroll = app.scroll.min(app.max_scroll());

    let paragraph = Paragraph::new(lines).scroll((app.scroll, 0));
    frame.render_widget(paragraph, inner);

    if app.max_scroll() > 0 {
        let mut state = ScrollbarState::new(app.max_scroll().into()).position(app.scroll.into());
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut state,
        );
    }
}

/// Draw the status bar with keybinding hints and the host class name.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut hints = vec![
        Span::raw(" Tab/1-3 "),
        Span::styled("Switch", Style::default().fg(Color::DarkGray)),
        Span::raw("  ↑↓ "),
        Span::styled("Scroll", Style::default().fg(Color::DarkGray)),
        Span::raw("  ? "),
        Span::styled("Help", Style::default().fg(Color::DarkGray)),
        Span::raw("  q "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
    ];

    if let Some(class_name) = &app.class_name {
        hints.push(Span::styled(
            format!("  [{}]", class_name),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    let popup_width = 44.min(area.width);
    let popup_height = 14.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let key = |keys: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(keys, Style::default().fg(Color::Cyan)),
            Span::raw(action),
        ])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        key("  Tab / → / l   ", "Next tab"),
        key("  S-Tab / ← / h ", "Previous tab"),
        key("  1 2 3         ", "Jump to tab"),
        key("  ↑/↓ or j/k    ", "Scroll"),
        key("  PgUp/PgDn     ", "Page scroll"),
        key("  Home/End g/G  ", "Jump to top/bottom"),
        key("  Click         ", "Select tab"),
        key("  q             ", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
    );

    frame.render_widget(help_paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::view::{Connector, Theme};
    use ratatui::backend::TestBackend;

    const FLOW_MARKER: &str = "Alternative: Cancel Order";
    const ARCHITECTURE_MARKER: &str = "System Architecture";
    const MODULES_MARKER: &str = "user_profile.move";

    fn render(app: &mut App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(120, 60)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .chunks(120)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn contains(screen: &[String], needle: &str) -> bool {
        screen.iter().any(|row| row.contains(needle))
    }

    #[test]
    fn test_exactly_one_panel_visible() {
        let markers = [
            (TabId::Flow, FLOW_MARKER),
            (TabId::Architecture, ARCHITECTURE_MARKER),
            (TabId::Modules, MODULES_MARKER),
        ];
        for (tab, _) in markers {
            let mut app = App::new(Theme::default(), None);
            app.select_tab(tab);
            let screen = render(&mut app);

            for (other, marker) in markers {
                assert_eq!(
                    contains(&screen, marker),
                    other == tab,
                    "{:?} marker visibility wrong while {:?} is active",
                    other,
                    tab
                );
            }
        }
    }

    #[test]
    fn test_select_twice_renders_identically() {
        let mut app = App::new(Theme::default(), None);
        app.select_tab(TabId::Modules);
        let once = render(&mut app);
        app.select_tab(TabId::Modules);
        let twice = render(&mut app);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_initial_screen_shows_flow_steps() {
        let mut app = App::new(Theme::default(), None);
        assert_eq!(app.tabs.active_tab(), TabId::Flow);

        let screen = render(&mut app);
        let find = |needle: &str| {
            screen
                .iter()
                .enumerate()
                .find_map(|(y, row)| row.find(needle).map(|x| (y, x)))
                .unwrap()
        };

        let step1 = find("Step 1");
        let step2 = find("Step 2");
        let step3 = find("Step 3");
        assert!(step1.1 < step2.1 && step2.1 < step3.1);

        let holding = find("Status: HOLDING");
        let delivered = find("Status: DELIVERED");
        let completed = find("Status: COMPLETED");
        assert!(holding.1 < delivered.1 && delivered.1 < completed.1);
    }

    #[test]
    fn test_architecture_then_modules_shows_only_modules() {
        let mut app = App::new(Theme::default(), None);
        app.select_tab(TabId::Architecture);
        app.select_tab(TabId::Modules);

        let panel = render_panel(app.tabs.active_tab());
        assert_eq!(panel.tab, TabId::Modules);
        assert_eq!(panel.root.children().len(), 5);

        let screen = render(&mut app);
        assert!(contains(&screen, MODULES_MARKER));
        assert!(!contains(&screen, ARCHITECTURE_MARKER));
        assert!(!contains(&screen, FLOW_MARKER));
    }

    #[test]
    fn test_render_panel_dispatch() {
        for tab in TabId::ALL {
            assert_eq!(render_panel(tab).tab, tab);
        }
        let flow = render_panel(TabId::Flow);
        assert_eq!(
            flow.root
                .count(|n| matches!(n, Node::Connector(Connector::Right))),
            2
        );
    }

    #[test]
    fn test_status_bar_shows_class_name() {
        let mut app = App::new(Theme::default(), Some("py-16 landing".to_string()));
        let screen = render(&mut app);
        assert!(contains(&screen, "[py-16 landing]"));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = App::new(Theme::default(), None);
        app.show_help = true;
        let screen = render(&mut app);
        assert!(contains(&screen, "Keyboard Shortcuts"));
    }

    #[test]
    fn test_draw_records_scroll_bounds() {
        let mut app = App::new(Theme::default(), None);
        app.select_tab(TabId::Modules);
        render(&mut app);

        // 60 rows minus header (3), tab bar (2), and status bar (1).
        assert_eq!(app.viewport_height, 54);
        assert!(app.content_height > 0);
        assert_eq!(app.tab_bar.y, 3);
    }
}
