//! Application state and TUI event loop
//!
//! Manages the application state and handles user input for browsing the
//! component tree.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};

use super::tree::{FlattenedNode, NodeBadges, TreeNode};

const ORANGE: Color = Color::Rgb(255, 165, 0);
const CORNFLOWER: Color = Color::Rgb(100, 149, 237);

/// Virtual scroll state for rendering only the visible rows
#[derive(Debug, Default, Clone)]
pub struct VirtualScrollState {
    /// First visible row index
    pub offset: usize,
    /// Number of visible rows in the viewport
    pub viewport_height: usize,
}

impl VirtualScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
    }

    /// Move the offset so `selected` is inside the viewport
    pub fn ensure_visible(&mut self, selected: usize, total: usize) {
        if total == 0 || self.viewport_height == 0 {
            return;
        }

        if selected < self.offset {
            self.offset = selected;
        } else if selected >= self.offset + self.viewport_height {
            self.offset = selected + 1 - self.viewport_height;
        }
    }

    /// The `[start, end)` rows to draw, after scrolling `selected` into view
    pub fn visible_range(&mut self, selected: usize, total: usize) -> (usize, usize) {
        if total == 0 || self.viewport_height == 0 {
            return (0, 0);
        }
        self.ensure_visible(selected, total);
        self.offset = self.offset.min(total.saturating_sub(1));
        (self.offset, (self.offset + self.viewport_height).min(total))
    }
}

/// Application state
pub struct App {
    /// The project root of the component tree
    pub tree: TreeNode,
    /// Currently selected index in the displayed list
    pub selected_index: usize,
    /// Flattened representation for rendering
    pub flattened: Vec<FlattenedNode>,
    /// Filtered flattened view (when search is active)
    pub filtered: Vec<FlattenedNode>,
    pub should_quit: bool,
    list_state: ListState,
    /// Whether search mode is active
    pub search_active: bool,
    pub search_query: String,
    pub scroll_state: VirtualScrollState,
}

impl App {
    /// Create a new application with the given root tree node
    pub fn new(root: TreeNode) -> Self {
        let mut app = Self {
            tree: root,
            selected_index: 0,
            flattened: Vec::new(),
            filtered: Vec::new(),
            should_quit: false,
            list_state: ListState::default(),
            search_active: false,
            search_query: String::new(),
            scroll_state: VirtualScrollState::new(),
        };
        app.refresh_flattened();
        app.list_state.select(Some(0));
        app
    }

    /// Refresh the flattened view from the tree
    pub fn refresh_flattened(&mut self) {
        self.flattened = self.tree.flatten();
        if !self.search_query.is_empty() {
            self.apply_filter();
        }
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let total = self.current_list_len();
        if total > 0 && self.selected_index >= total {
            self.selected_index = total - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// The list currently on screen
    pub fn visible_nodes(&self) -> &[FlattenedNode] {
        if self.search_query.is_empty() {
            &self.flattened
        } else {
            &self.filtered
        }
    }

    fn current_list_len(&self) -> usize {
        self.visible_nodes().len()
    }

    /// The node under the cursor, if any
    pub fn selected_node(&self) -> Option<&FlattenedNode> {
        self.visible_nodes().get(self.selected_index)
    }

    fn select(&mut self, index: usize) {
        let total = self.current_list_len();
        if total == 0 {
            return;
        }
        self.selected_index = index.min(total - 1);
        self.list_state.select(Some(self.selected_index));
        self.scroll_state.ensure_visible(self.selected_index, total);
    }

    pub fn select_next(&mut self) {
        self.select(self.selected_index + 1);
    }

    pub fn select_previous(&mut self) {
        self.select(self.selected_index.saturating_sub(1));
    }

    pub fn page_down(&mut self) {
        let page = self.scroll_state.viewport_height.max(1);
        self.select(self.selected_index + page);
    }

    pub fn page_up(&mut self) {
        let page = self.scroll_state.viewport_height.max(1);
        self.select(self.selected_index.saturating_sub(page));
    }

    pub fn select_first(&mut self) {
        self.scroll_state.offset = 0;
        self.select(0);
    }

    pub fn select_last(&mut self) {
        self.select(self.current_list_len().saturating_sub(1));
    }

    /// Toggle expansion of the selected item
    ///
    /// Works on filtered results too: the node keeps its position in the
    /// unfiltered list.
    pub fn toggle_selected(&mut self) {
        let Some(position) = self.selected_node().map(|node| node.position) else {
            return;
        };
        if self.tree.toggle_at_index(position) {
            self.refresh_flattened();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Branch-drawing prefix for the node at `index` of the unfiltered list
    fn tree_prefix(&self, index: usize) -> String {
        let Some(node) = self.flattened.get(index) else {
            return String::new();
        };

        // For each depth level, whether the open ancestor there is a last child
        let mut last_at_depth: Vec<bool> = Vec::new();
        for n in &self.flattened[..=index] {
            last_at_depth.truncate(n.depth);
            last_at_depth.resize(n.depth, false);
            last_at_depth.push(n.is_last_child);
        }

        let mut prefix = String::new();
        for depth in 1..node.depth {
            let ancestor_is_last = last_at_depth.get(depth).copied().unwrap_or(true);
            prefix.push_str(if ancestor_is_last { "    " } else { "│   " });
        }
        if node.depth > 0 {
            prefix.push_str(if node.is_last_child { "└── " } else { "├── " });
        }
        prefix
    }

    /// Start search mode
    pub fn start_search(&mut self) {
        self.search_active = true;
        self.search_query.clear();
    }

    /// Clear search and return to normal mode
    pub fn clear_search(&mut self) {
        self.search_active = false;
        self.search_query.clear();
        self.filtered.clear();
        self.selected_index = 0;
        self.list_state.select(Some(0));
    }

    pub fn search_push(&mut self, c: char) {
        self.search_query.push(c);
        self.update_filter();
    }

    pub fn search_pop(&mut self) {
        self.search_query.pop();
        self.update_filter();
    }

    fn apply_filter(&mut self) {
        self.filtered = self
            .flattened
            .iter()
            .filter(|node| fuzzy_match(&node.name, &self.search_query))
            .cloned()
            .collect();
    }

    fn update_filter(&mut self) {
        if self.search_query.is_empty() {
            self.filtered.clear();
        } else {
            self.apply_filter();
        }
        self.selected_index = 0;
        self.scroll_state.offset = 0;
        self.list_state.select(Some(0));
    }
}

/// Case-insensitive subsequence match: every query character must appear
/// in the text, in order
fn fuzzy_match(text: &str, query: &str) -> bool {
    let text_lower = text.to_lowercase();
    let mut text_chars = text_lower.chars();
    query
        .to_lowercase()
        .chars()
        .all(|q| text_chars.any(|c| c == q))
}

/// Color for a component row; the most severe badge wins
fn badge_color(badges: &NodeBadges, depth: usize) -> Color {
    if depth == 0 {
        Color::White
    } else if badges.recursive {
        Color::Red
    } else if badges.prop_drilling {
        ORANGE
    } else if badges.orphan {
        Color::Yellow
    } else if badges.shared {
        Color::Cyan
    } else {
        Color::Green
    }
}

/// Deepest level that still gets dimmer
const MAX_DEPTH_FOR_COLOR: usize = 10;

/// Brightness factor from 1.0 at the root down to 0.4 at `MAX_DEPTH_FOR_COLOR`
fn depth_brightness(depth: usize) -> f32 {
    let ratio = depth.min(MAX_DEPTH_FOR_COLOR) as f32 / MAX_DEPTH_FOR_COLOR as f32;
    1.0 - ratio * 0.6
}

/// Dim a color according to depth so nesting is visible at a glance
fn dim_for_depth(color: Color, depth: usize) -> Color {
    let (r, g, b) = match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Green => (0, 255, 0),
        Color::Yellow => (255, 255, 0),
        Color::Cyan => (0, 255, 255),
        Color::Red => (255, 0, 0),
        Color::White => (255, 255, 255),
        other => return other,
    };
    let k = depth_brightness(depth);
    let scale = |v: u8| (v as f32 * k) as u8;
    Color::Rgb(scale(r), scale(g), scale(b))
}

fn depth_label(depth: usize) -> String {
    if depth == 0 {
        String::new()
    } else {
        format!("L{} ", depth)
    }
}

fn badge_style(label: &str) -> Style {
    let color = match label {
        "[R]" => Color::Red,
        "[P]" => ORANGE,
        "[O]" => Color::Yellow,
        "[=]" => Color::DarkGray,
        "[U]" => Color::Magenta,
        _ => Color::Cyan,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Run the TUI application
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if app.search_active {
                match key.code {
                    KeyCode::Esc => app.clear_search(),
                    // Leave search mode but keep the filter
                    KeyCode::Enter => app.search_active = false,
                    KeyCode::Backspace => app.search_pop(),
                    KeyCode::Char(c) => app.search_push(c),
                    KeyCode::Down | KeyCode::Tab => app.select_next(),
                    KeyCode::Up | KeyCode::BackTab => app.select_previous(),
                    _ => {}
                }
            } else {
                match key.code {
                    KeyCode::Char('q') => app.quit(),
                    KeyCode::Esc if !app.search_query.is_empty() => app.clear_search(),
                    KeyCode::Esc => app.quit(),
                    KeyCode::Char('/') => app.start_search(),
                    KeyCode::Char('j') | KeyCode::Down => app.select_next(),
                    KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
                    KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),
                    KeyCode::PageDown | KeyCode::Char('d') => app.page_down(),
                    KeyCode::PageUp | KeyCode::Char('u') => app.page_up(),
                    KeyCode::Home | KeyCode::Char('g') => app.select_first(),
                    KeyCode::End | KeyCode::Char('G') => app.select_last(),
                    _ => {}
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Render the application UI
fn render(frame: &mut Frame, app: &mut App) {
    let show_search = app.search_active || !app.search_query.is_empty();

    let mut constraints = vec![Constraint::Length(3)];
    if show_search {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(3));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    let mut next = 1;
    if show_search {
        render_search_bar(frame, app, chunks[next]);
        next += 1;
    }
    render_tree(frame, app, chunks[next]);
    render_footer(frame, app, chunks[next + 1]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let detail = app
        .selected_node()
        .filter(|node| !node.path.is_empty())
        .map(|node| format!("  {}", node.path))
        .unwrap_or_default();

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("compscope - {}", app.tree.name),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(detail, Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (border_color, title) = if app.search_active {
        (Color::Yellow, "Search (Enter to confirm, Esc to cancel)")
    } else {
        (Color::Gray, "Filter (/ to edit, Esc to clear)")
    };

    let cursor = if app.search_active { "_" } else { "" };
    let matches = if app.search_query.is_empty() {
        String::new()
    } else {
        format!(" ({} matches)", app.filtered.len())
    };

    let content = Line::from(vec![
        Span::styled(format!("/{}", app.search_query), Style::default().fg(Color::White)),
        Span::styled(
            cursor,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::SLOW_BLINK),
        ),
        Span::styled(matches, Style::default().fg(Color::DarkGray)),
    ]);

    let search_bar = Paragraph::new(content).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(search_bar, area);
}

/// Render the component tree, drawing only the rows in the viewport
pub fn render_tree(frame: &mut Frame, app: &mut App, area: Rect) {
    let has_search = !app.search_query.is_empty();
    let total = app.current_list_len();

    // Borders take two rows
    app.scroll_state
        .set_viewport_height((area.height as usize).saturating_sub(2));
    let (start, end) = app.scroll_state.visible_range(app.selected_index, total);

    let items: Vec<ListItem> = app.visible_nodes()[start..end]
        .iter()
        .map(|node| {
            let color = dim_for_depth(badge_color(&node.badges, node.depth), node.depth);
            let prefix = if has_search {
                String::new()
            } else {
                app.tree_prefix(node.position)
            };

            let mut spans = vec![
                Span::styled(prefix, Style::default().fg(Color::DarkGray)),
                Span::styled(node.expansion_indicator(), Style::default().fg(Color::Yellow)),
                Span::styled(
                    depth_label(node.depth),
                    Style::default().fg(dim_for_depth(CORNFLOWER, node.depth)),
                ),
            ];
            spans.extend(highlight_matches(&node.name, &app.search_query, color));
            for label in node.badge_labels() {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(label, badge_style(label)));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    app.list_state
        .select(Some(app.selected_index.saturating_sub(start)));

    let title = if has_search {
        format!("Components (filtered: {} matches)", total)
    } else if total > end - start {
        format!("Components ({}-{} of {})", start + 1, end, total)
    } else {
        format!("Components ({})", total)
    };

    let tree_list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    frame.render_stateful_widget(tree_list, area, &mut app.list_state);
}

/// Split `text` into spans, emphasizing the characters a fuzzy query matched
fn highlight_matches(text: &str, query: &str, base_color: Color) -> Vec<Span<'static>> {
    let base = Style::default().fg(base_color);
    if query.is_empty() {
        return vec![Span::styled(text.to_string(), base)];
    }

    let hit = Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let mut pending = query.to_lowercase().chars().collect::<Vec<_>>().into_iter().peekable();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut segment = String::new();
    let mut segment_hit = false;

    for c in text.chars() {
        let lower = c.to_lowercase().next().unwrap_or(c);
        let is_hit = pending.peek() == Some(&lower);
        if is_hit {
            pending.next();
        }
        if is_hit != segment_hit && !segment.is_empty() {
            let style = if segment_hit { hit } else { base };
            spans.push(Span::styled(std::mem::take(&mut segment), style));
        }
        segment.push(c);
        segment_hit = is_hit;
    }
    if !segment.is_empty() {
        spans.push(Span::styled(segment, if segment_hit { hit } else { base }));
    }

    spans
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));

    let help_text = if app.search_active {
        Line::from(vec![
            key("Type"),
            Span::raw(" to search  "),
            key("↑/↓"),
            Span::raw(" Navigate  "),
            key("Enter"),
            Span::raw(" Confirm  "),
            key("Esc"),
            Span::raw(" Cancel"),
        ])
    } else {
        Line::from(vec![
            key("/"),
            Span::raw(" Search  "),
            key("j/k"),
            Span::raw(" Nav  "),
            key("d/u"),
            Span::raw(" Page  "),
            key("g/G"),
            Span::raw(" Top/Bot  "),
            key("Enter"),
            Span::raw(" Toggle  "),
            key("q"),
            Span::raw(" Quit  │  "),
            Span::styled("[P]", badge_style("[P]")),
            Span::raw(" Props  "),
            Span::styled("[O]", badge_style("[O]")),
            Span::raw(" Orphan  "),
            Span::styled("[S]", badge_style("[S]")),
            Span::raw(" Shared  "),
            Span::styled("[R]", badge_style("[R]")),
            Span::raw(" Recursive  "),
            Span::styled("[=]", badge_style("[=]")),
            Span::raw(" Seen above  "),
            Span::styled("[U]", badge_style("[U]")),
            Span::raw(" No import"),
        ])
    };

    let footer = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_app() -> App {
        let mut root = TreeNode::new("storefront", "");

        let mut layout = TreeNode::new("Layout", "src/Layout.tsx");
        layout.add_child(TreeNode::new("NavBar", "src/NavBar.tsx"));

        let checkout = TreeNode::new("Checkout", "src/Checkout.tsx");

        root.add_child(layout);
        root.add_child(checkout);
        root.expanded = true;

        App::new(root)
    }

    #[test]
    fn test_app_creation() {
        let app = create_test_app();
        assert_eq!(app.selected_index, 0);
        assert!(!app.should_quit);
        // Root is expanded, so we should see root + 2 children
        assert_eq!(app.flattened.len(), 3);
    }

    #[test]
    fn test_select_next_and_previous_clamp() {
        let mut app = create_test_app();

        app.select_next();
        app.select_next();
        app.select_next();
        assert_eq!(app.selected_index, 2);

        app.select_previous();
        app.select_previous();
        app.select_previous();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_toggle_selected() {
        let mut app = create_test_app();
        app.select_next();

        app.toggle_selected();
        assert_eq!(app.flattened.len(), 4);
        assert_eq!(app.flattened[2].name, "NavBar");

        app.toggle_selected();
        assert_eq!(app.flattened.len(), 3);
    }

    #[test]
    fn test_toggle_from_filtered_view() {
        let mut app = create_test_app();
        app.start_search();
        for c in "lay".chars() {
            app.search_push(c);
        }
        assert_eq!(app.filtered.len(), 1);

        app.toggle_selected();
        assert!(app.tree.children[0].expanded);
        assert_eq!(app.flattened.len(), 4);
        // The filter is reapplied to the new flattening
        assert_eq!(app.filtered.len(), 1);
        assert_eq!(app.filtered[0].name, "Layout");
    }

    #[test]
    fn test_quit() {
        let mut app = create_test_app();
        app.quit();
        assert!(app.should_quit);
    }

    #[test]
    fn test_fuzzy_match() {
        assert!(fuzzy_match("NavBar", "NavBar"));
        assert!(fuzzy_match("NavBar", "nav"));
        assert!(fuzzy_match("NavBar", "nbr"));
        assert!(fuzzy_match("navbar", "NAV"));
        assert!(!fuzzy_match("NavBar", "xyz"));
        assert!(fuzzy_match("NavBar", ""));
        assert!(!fuzzy_match("Nav", "NavBar"));
        // Order matters
        assert!(!fuzzy_match("NavBar", "rn"));
    }

    #[test]
    fn test_search_start_and_clear() {
        let mut app = create_test_app();
        assert!(!app.search_active);

        app.start_search();
        assert!(app.search_active);

        app.search_push('c');
        app.search_push('h');
        assert_eq!(app.search_query, "ch");
        assert_eq!(app.filtered.len(), 1);

        app.clear_search();
        assert!(!app.search_active);
        assert!(app.search_query.is_empty());
        assert!(app.filtered.is_empty());
    }

    #[test]
    fn test_search_pop() {
        let mut app = create_test_app();
        app.start_search();

        app.search_push('l');
        app.search_push('a');
        app.search_pop();
        assert_eq!(app.search_query, "l");

        app.search_pop();
        assert!(app.search_query.is_empty());
        assert!(app.filtered.is_empty());

        // Pop on empty doesn't panic
        app.search_pop();
        assert!(app.search_query.is_empty());
    }

    #[test]
    fn test_depth_brightness() {
        assert!((depth_brightness(0) - 1.0).abs() < f32::EPSILON);
        assert!((depth_brightness(MAX_DEPTH_FOR_COLOR) - 0.4).abs() < f32::EPSILON);
        assert!((depth_brightness(MAX_DEPTH_FOR_COLOR + 5) - 0.4).abs() < f32::EPSILON);

        let mid = depth_brightness(5);
        assert!(mid > 0.4 && mid < 1.0);
    }

    #[test]
    fn test_dim_for_depth() {
        assert_eq!(dim_for_depth(Color::Green, 0), Color::Rgb(0, 255, 0));
        match dim_for_depth(Color::Green, MAX_DEPTH_FOR_COLOR) {
            Color::Rgb(_, g, _) => assert!(g < 255 && g > 50),
            other => panic!("Expected RGB color, got {:?}", other),
        }
        assert_eq!(dim_for_depth(Color::DarkGray, 3), Color::DarkGray);
    }

    #[test]
    fn test_badge_color_priority() {
        let all = NodeBadges {
            orphan: true,
            prop_drilling: true,
            shared: true,
            recursive: true,
            repeated: true,
            unimported: true,
        };
        assert_eq!(badge_color(&all, 1), Color::Red);
        assert_eq!(badge_color(&all, 0), Color::White);

        let props_and_orphan = NodeBadges {
            orphan: true,
            prop_drilling: true,
            ..NodeBadges::default()
        };
        assert_eq!(badge_color(&props_and_orphan, 2), ORANGE);
        assert_eq!(badge_color(&NodeBadges::default(), 2), Color::Green);
    }

    #[test]
    fn test_depth_label() {
        assert_eq!(depth_label(0), "");
        assert_eq!(depth_label(1), "L1 ");
        assert_eq!(depth_label(12), "L12 ");
    }

    #[test]
    fn test_tree_prefix() {
        let mut app = create_test_app();
        app.select_next();
        app.toggle_selected();
        // storefront, Layout, NavBar, Checkout

        assert_eq!(app.tree_prefix(0), "");
        assert_eq!(app.tree_prefix(1), "├── ");
        assert_eq!(app.tree_prefix(2), "│   └── ");
        assert_eq!(app.tree_prefix(3), "└── ");
    }

    #[test]
    fn test_highlight_matches_segments() {
        let spans = highlight_matches("NavBar", "nb", Color::Green);
        let texts: Vec<&str> = spans.iter().map(|s| &*s.content).collect();
        assert_eq!(texts, vec!["N", "av", "B", "ar"]);

        let plain = highlight_matches("NavBar", "", Color::Green);
        assert_eq!(plain.len(), 1);
    }

    #[test]
    fn test_virtual_scroll_visible_range() {
        let mut state = VirtualScrollState::new();
        state.set_viewport_height(10);

        assert_eq!(state.visible_range(0, 100), (0, 10));

        let (start, end) = state.visible_range(50, 100);
        assert!(start <= 50 && end > 50);

        let (start, end) = state.visible_range(99, 100);
        assert_eq!((start, end), (90, 100));

        assert_eq!(state.visible_range(0, 0), (0, 0));
    }

    #[test]
    fn test_virtual_scroll_ensure_visible() {
        let mut state = VirtualScrollState::new();
        state.set_viewport_height(10);
        state.offset = 50;

        state.ensure_visible(40, 100);
        assert_eq!(state.offset, 40);

        state.offset = 0;
        state.ensure_visible(15, 100);
        assert_eq!(state.offset, 6);
    }

    #[test]
    fn test_page_navigation() {
        let mut app = create_test_app();
        app.scroll_state.set_viewport_height(2);
        app.select_next();
        app.toggle_selected();
        app.select_first();

        app.page_down();
        assert_eq!(app.selected_index, 2);

        app.page_down();
        assert_eq!(app.selected_index, 3);

        app.page_up();
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_select_first_last() {
        let mut app = create_test_app();

        app.select_last();
        assert_eq!(app.selected_index, app.flattened.len() - 1);

        app.select_first();
        assert_eq!(app.selected_index, 0);
    }
}
