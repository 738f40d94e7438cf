// Tab bar rendering and hit-testing.
// Highlights the active tab and maps a click column back to a tab.

use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::state::TabId;

const DIVIDER: &str = " │ ";
/// Left and right padding the `Tabs` widget draws around each title.
const PADDING: u16 = 1;

/// Draw the tab bar.
pub fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let active = app.tabs.active_tab();

    let tab_titles: Vec<Line> = TabId::ALL
        .iter()
        .map(|tab| {
            let style = if *tab == active {
                Style::default()
                    .fg(Color::Black)
                    .bg(app.theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(tab.title(), style))
        })
        .collect();

    let tabs_widget = Tabs::new(tab_titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .select(active.index())
        .highlight_style(Style::default().fg(Color::Black).bg(app.theme.accent))
        .divider(Span::styled(DIVIDER, Style::default().fg(Color::DarkGray)));

    frame.render_widget(tabs_widget, area);
}

/// Which tab title, if any, sits under the given terminal cell.
/// `area` is the area the tab bar was drawn into.
pub fn tab_at(column: u16, row: u16, area: Rect) -> Option<TabId> {
    if row != area.y || column < area.x || column >= area.right() {
        return None;
    }

    let mut x = area.x;
    for (i, tab) in TabId::ALL.iter().enumerate() {
        let span = PADDING * 2 + tab.title().width() as u16;
        if column >= x && column < x + span {
            return Some(*tab);
        }
        x += span;
        if i + 1 < TabId::ALL.len() {
            x += DIVIDER.width() as u16;
        }
    }
    None
}
