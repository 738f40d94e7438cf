// Visual tree for panels.
// Panels are built as a `Node` tree, then flattened into fixed-width styled lines.

use ratatui::prelude::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::content::{ColorTag, Icon};

/// Grid and row cells narrower than this collapse into a single column.
pub const MIN_COLUMN_WIDTH: usize = 18;

/// Horizontal gap between grid cells.
const GRID_GAP: usize = 2;

/// Width reserved for a horizontal connector inside a row.
const CONNECTOR_WIDTH: usize = 3;

/// Direction of the arrow drawn between consecutive items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    Right,
    Down,
}

/// Item prefix used by a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Numbered,
    Bullet,
    Code,
    Tag,
}

/// A node of a panel's visual tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Children top to bottom with `gap` blank lines between them.
    Stack { gap: usize, children: Vec<Node> },
    /// Children side by side. `Connector::Right` children get a narrow fixed column.
    Row(Vec<Node>),
    Grid { columns: usize, cells: Vec<Node> },
    /// Bordered container.
    Card {
        title: Option<String>,
        tone: ColorTag,
        children: Vec<Node>,
    },
    Heading {
        icon: Option<Icon>,
        text: String,
        tone: ColorTag,
    },
    Text { text: String, tone: ColorTag },
    /// Role-labeled line, e.g. "Buyer: Clicks Buy Now".
    Labeled {
        icon: Icon,
        label: String,
        text: String,
    },
    Badge { label: String, tone: ColorTag },
    List {
        heading: Option<String>,
        marker: Marker,
        items: Vec<String>,
    },
    Connector(Connector),
}

/// Colors used when painting a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(0xC6, 0xD8, 0x70),
        }
    }
}

impl Theme {
    pub fn color(&self, tag: ColorTag) -> Color {
        match tag {
            ColorTag::Blue => Color::Blue,
            ColorTag::Purple => Color::Magenta,
            ColorTag::Green => Color::Green,
            ColorTag::Orange => Color::Rgb(0xF9, 0x73, 0x16),
            ColorTag::Red => Color::Red,
            ColorTag::Neutral => Color::Gray,
        }
    }

    fn text(&self, tag: ColorTag) -> Style {
        match tag {
            ColorTag::Neutral => Style::default(),
            _ => Style::default().fg(self.color(tag)),
        }
    }
}

/// Glyph drawn for an icon reference.
pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Lock => "🔒",
        Icon::Package => "📦",
        Icon::CheckCircle => "✅",
        Icon::User => "👤",
        Icon::Store => "🏪",
        Icon::ShieldCheck => "🔐",
        Icon::TrendingUp => "📈",
        Icon::Database => "💾",
        Icon::Layers => "🧱",
        Icon::Code => "💻",
        Icon::Wallet => "👛",
        Icon::FileText => "📄",
    }
}

impl Node {
    /// Direct children of container nodes.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Stack { children, .. } | Node::Card { children, .. } => children,
            Node::Row(children) => children,
            Node::Grid { cells, .. } => cells,
            _ => &[],
        }
    }

    /// Visit every node in pre-order.
    #[cfg(test)]
    pub fn walk<F: FnMut(&Node)>(&self, f: &mut F) {
        f(self);
        for child in self.children() {
            child.walk(f);
        }
    }

    /// Number of nodes matching `pred` in the whole tree.
    #[cfg(test)]
    pub fn count(&self, pred: impl Fn(&Node) -> bool) -> usize {
        let mut n = 0;
        self.walk(&mut |node| {
            if pred(node) {
                n += 1;
            }
        });
        n
    }

    /// Paint the tree. Every returned line is exactly `width` cells wide.
    pub fn lines(&self, width: usize, theme: &Theme) -> Vec<Line<'static>> {
        if width == 0 {
            return Vec::new();
        }
        let lines = match self {
            Node::Stack { gap, children } => {
                let mut out = Vec::new();
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        out.extend((0..*gap).map(|_| blank(width)));
                    }
                    out.extend(child.lines(width, theme));
                }
                out
            }
            Node::Row(children) => row_lines(children, width, theme),
            Node::Grid { columns, cells } => grid_lines(*columns, cells, width, theme),
            Node::Card {
                title,
                tone,
                children,
            } => card_lines(title.as_deref(), *tone, children, width, theme),
            Node::Heading { icon, text, tone } => {
                let prefix = icon.map(|i| format!("{} ", glyph(i))).unwrap_or_default();
                let style = theme.text(*tone).add_modifier(Modifier::BOLD);
                hanging(&prefix, Style::default(), text, style, width)
            }
            Node::Text { text, tone } => wrap(text, width)
                .into_iter()
                .map(|l| Line::from(Span::styled(l, theme.text(*tone))))
                .collect(),
            Node::Labeled { icon, label, text } => {
                let prefix = format!("{} {}: ", glyph(*icon), label);
                let prefix_style = Style::default().add_modifier(Modifier::BOLD);
                hanging(&prefix, prefix_style, text, Style::default(), width)
            }
            Node::Badge { label, tone } => vec![Line::from(Span::styled(
                format!(" {} ", label),
                Style::default()
                    .fg(Color::Black)
                    .bg(theme.color(*tone))
                    .add_modifier(Modifier::BOLD),
            ))],
            Node::List {
                heading,
                marker,
                items,
            } => list_lines(heading.as_deref(), *marker, items, width, theme),
            Node::Connector(_) => {
                let pad = (width - 1) / 2;
                vec![Line::from(vec![
                    Span::raw(" ".repeat(pad)),
                    Span::styled("↓", Style::default().fg(theme.accent)),
                ])]
            }
        };
        lines.into_iter().map(|line| fit(line, width)).collect()
    }

    /// Paint without styles, one string per line with trailing spaces trimmed.
    pub fn plain_text(&self, width: usize) -> String {
        self.lines(width, &Theme::default())
            .iter()
            .map(|line| {
                let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
                text.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn blank(width: usize) -> Line<'static> {
    Line::from(" ".repeat(width))
}

/// Pad or truncate a line to exactly `width` cells.
fn fit(mut line: Line<'static>, width: usize) -> Line<'static> {
    let current = line.width();
    if current < width {
        line.spans.push(Span::raw(" ".repeat(width - current)));
    } else if current > width {
        let mut kept = Vec::new();
        let mut used = 0;
        for span in std::mem::take(&mut line.spans) {
            let w = span.width();
            if used + w <= width {
                used += w;
                kept.push(span);
                continue;
            }
            let mut text = String::new();
            for ch in span.content.chars() {
                let cw = ch.width().unwrap_or(0);
                if used + cw > width {
                    break;
                }
                used += cw;
                text.push(ch);
            }
            kept.push(Span::styled(text, span.style));
            break;
        }
        if used < width {
            kept.push(Span::raw(" ".repeat(width - used)));
        }
        line.spans = kept;
    }
    line
}

/// Word-wrap `text` to `width` cells. Words wider than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if word_width > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current_width = 0;
            for ch in word.chars() {
                let cw = ch.width().unwrap_or(0);
                if current_width + cw > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += cw;
            }
            continue;
        }

        if !current.is_empty() && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap `text` after `prefix`, indenting continuation lines under the text.
fn hanging(
    prefix: &str,
    prefix_style: Style,
    text: &str,
    style: Style,
    width: usize,
) -> Vec<Line<'static>> {
    let indent = prefix.width();
    let avail = width.saturating_sub(indent).max(1);
    wrap(text, avail)
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| {
            let lead = if i == 0 {
                Span::styled(prefix.to_string(), prefix_style)
            } else {
                Span::raw(" ".repeat(indent))
            };
            Line::from(vec![lead, Span::styled(chunk, style)])
        })
        .collect()
}

fn list_lines(
    heading: Option<&str>,
    marker: Marker,
    items: &[String],
    width: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut out = Vec::new();
    if let Some(heading) = heading {
        let style = Style::default().add_modifier(Modifier::BOLD);
        out.extend(
            wrap(heading, width)
                .into_iter()
                .map(|l| Line::from(Span::styled(l, style))),
        );
    }
    for (i, item) in items.iter().enumerate() {
        let (prefix, prefix_style, style) = match marker {
            Marker::Numbered => (
                format!("{}. ", i + 1),
                Style::default().fg(Color::DarkGray),
                Style::default(),
            ),
            Marker::Bullet => (
                "• ".to_string(),
                Style::default().fg(theme.accent),
                Style::default(),
            ),
            Marker::Code => (
                "› ".to_string(),
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::Cyan),
            ),
            Marker::Tag => (
                "◆ ".to_string(),
                Style::default().fg(Color::Yellow),
                Style::default().fg(Color::Yellow),
            ),
        };
        out.extend(hanging(&prefix, prefix_style, item, style, width));
    }
    out
}

fn card_lines(
    title: Option<&str>,
    tone: ColorTag,
    children: &[Node],
    width: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    if width < 4 {
        return children
            .iter()
            .flat_map(|c| c.lines(width, theme))
            .collect();
    }
    let border = Style::default().fg(theme.color(tone));
    let inner = width - 4;

    let mut top = vec![Span::styled("┌─", border)];
    if let Some(title) = title {
        let title = wrap(title, width.saturating_sub(5).max(1)).remove(0);
        top.push(Span::styled(
            format!(" {} ", title),
            border.add_modifier(Modifier::BOLD),
        ));
    }
    let used: usize = top.iter().map(|s| s.width()).sum();
    top.push(Span::styled("─".repeat(width.saturating_sub(used + 1)), border));
    top.push(Span::styled("┐", border));

    let mut out = vec![Line::from(top)];
    for child in children {
        for line in child.lines(inner, theme) {
            let mut spans = vec![Span::styled("│ ", border)];
            spans.extend(line.spans);
            spans.push(Span::styled(" │", border));
            out.push(Line::from(spans));
        }
    }
    out.push(Line::from(Span::styled(
        format!("└{}┘", "─".repeat(width - 2)),
        border,
    )));
    out
}

/// Place painted columns side by side, padding shorter columns with blanks.
fn join_columns(columns: Vec<(Vec<Line<'static>>, usize)>, gap: usize) -> Vec<Line<'static>> {
    let height = columns.iter().map(|(lines, _)| lines.len()).max().unwrap_or(0);
    (0..height)
        .map(|row| {
            let mut spans = Vec::new();
            for (i, (lines, w)) in columns.iter().enumerate() {
                if i > 0 && gap > 0 {
                    spans.push(Span::raw(" ".repeat(gap)));
                }
                match lines.get(row) {
                    Some(line) => spans.extend(line.spans.iter().cloned()),
                    None => spans.push(Span::raw(" ".repeat(*w))),
                }
            }
            Line::from(spans)
        })
        .collect()
}

fn grid_lines(columns: usize, cells: &[Node], width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut columns = columns.max(1);
    let mut col_width = width.saturating_sub(GRID_GAP * (columns - 1)) / columns;
    if columns > 1 && col_width < MIN_COLUMN_WIDTH {
        columns = 1;
        col_width = width;
    }

    let mut out = Vec::new();
    for chunk in cells.chunks(columns) {
        let painted = chunk
            .iter()
            .map(|cell| (cell.lines(col_width, theme), col_width))
            .collect();
        out.extend(join_columns(painted, GRID_GAP));
    }
    out
}

fn is_arrow(node: &Node) -> bool {
    matches!(node, Node::Connector(Connector::Right))
}

fn row_lines(children: &[Node], width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let arrows = children.iter().filter(|n| is_arrow(n)).count();
    let items = children.len() - arrows;
    if items == 0 {
        return Vec::new();
    }

    let avail = width.saturating_sub(arrows * CONNECTOR_WIDTH);
    let col_width = avail / items;
    if col_width < MIN_COLUMN_WIDTH {
        return children.iter().flat_map(|c| c.lines(width, theme)).collect();
    }

    let painted: Vec<Option<Vec<Line<'static>>>> = children
        .iter()
        .map(|c| (!is_arrow(c)).then(|| c.lines(col_width, theme)))
        .collect();
    let height = painted
        .iter()
        .flatten()
        .map(|lines| lines.len())
        .max()
        .unwrap_or(0);

    let arrow_row = height / 2;
    let columns = painted
        .into_iter()
        .map(|lines| match lines {
            Some(lines) => (lines, col_width),
            None => {
                let arrow: Vec<Line<'static>> = (0..height)
                    .map(|row| {
                        if row == arrow_row {
                            Line::from(vec![
                                Span::raw(" "),
                                Span::styled("→", Style::default().fg(theme.accent)),
                                Span::raw(" "),
                            ])
                        } else {
                            blank(CONNECTOR_WIDTH)
                        }
                    })
                    .collect();
                (arrow, CONNECTOR_WIDTH)
            }
        })
        .collect();
    join_columns(columns, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Node {
        Node::Text {
            text: s.to_string(),
            tone: ColorTag::Neutral,
        }
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("", 10), vec![""]);
        assert_eq!(wrap("  spaced   out  ", 20), vec!["spaced out"]);
    }

    #[test]
    fn test_lines_have_exact_width() {
        let tree = Node::Stack {
            gap: 1,
            children: vec![
                Node::Card {
                    title: Some("A rather long card title that must be cut".to_string()),
                    tone: ColorTag::Blue,
                    children: vec![text("hello world, this wraps around a few times")],
                },
                Node::Grid {
                    columns: 2,
                    cells: vec![text("left"), text("right"), text("third")],
                },
                Node::Badge {
                    label: "Status: HOLDING".to_string(),
                    tone: ColorTag::Blue,
                },
            ],
        };
        for width in [5, 20, 41, 80] {
            for line in tree.lines(width, &Theme::default()) {
                assert_eq!(line.width(), width);
            }
        }
    }

    #[test]
    fn test_card_borders() {
        let card = Node::Card {
            title: Some("Box".to_string()),
            tone: ColorTag::Neutral,
            children: vec![text("body")],
        };
        let plain = card.plain_text(12);
        let rows: Vec<_> = plain.lines().collect();
        assert_eq!(rows[0], "┌─ Box ────┐");
        assert_eq!(rows[1], "│ body     │");
        assert_eq!(rows[2], "└──────────┘");
    }

    #[test]
    fn test_grid_collapses_when_narrow() {
        let grid = Node::Grid {
            columns: 3,
            cells: vec![text("a"), text("b"), text("c")],
        };
        assert_eq!(grid.lines(90, &Theme::default()).len(), 1);
        assert_eq!(grid.lines(30, &Theme::default()).len(), 3);
    }

    #[test]
    fn test_row_places_arrows_between_items() {
        let row = Node::Row(vec![
            text("first"),
            Node::Connector(Connector::Right),
            text("second"),
        ]);
        let plain = row.plain_text(60);
        assert_eq!(plain.lines().count(), 1);
        assert!(plain.contains("first"));
        assert!(plain.contains(" → "));

        let collapsed = row.plain_text(20);
        let rows: Vec<_> = collapsed.lines().map(str::trim).collect();
        assert_eq!(rows, ["first", "↓", "second"]);
    }

    #[test]
    fn test_numbered_list() {
        let list = Node::List {
            heading: Some("Steps".to_string()),
            marker: Marker::Numbered,
            items: vec!["alpha".to_string(), "beta".to_string()],
        };
        assert_eq!(list.plain_text(20), "Steps\n1. alpha\n2. beta");
    }

    #[test]
    fn test_walk_and_count() {
        let tree = Node::Stack {
            gap: 0,
            children: vec![
                Node::Connector(Connector::Down),
                Node::Card {
                    title: None,
                    tone: ColorTag::Neutral,
                    children: vec![Node::Connector(Connector::Down)],
                },
            ],
        };
        assert_eq!(tree.count(|n| matches!(n, Node::Connector(_))), 2);
        let mut visited = 0;
        tree.walk(&mut |_| visited += 1);
        assert_eq!(visited, 4);
    }
}
