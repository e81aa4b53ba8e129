//! Drawer menu overlay.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::state::{DRAWER_ENTRIES, DrawerState, USER_TAGLINE};
use crate::ui::Theme;
use crate::ui::layout::left_panel;

const DRAWER_WIDTH: u16 = 38;

/// Drawer menu overlay.
pub struct DrawerMenu;

impl DrawerMenu {
    /// Render the drawer docked to the left of `area`.
    pub fn render(frame: &mut Frame, area: Rect, drawer: &DrawerState, tick: u64, theme: &Theme) {
        let area = left_panel(DRAWER_WIDTH, area);
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .style(theme.base());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Close / logout
                Constraint::Length(3), // Identity
                Constraint::Min(0),    // Entries
            ])
            .split(inner);

        Self::render_actions(frame, chunks[0], theme);
        Self::render_identity(frame, chunks[1], drawer, tick, theme);

        let items: Vec<ListItem> = DRAWER_ENTRIES
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(entry.label, Style::default().fg(theme.foreground)),
                    Span::raw("  "),
                    Span::styled(
                        entry.badge,
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::ITALIC),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(theme.selected())
            .highlight_symbol("▶ ");
        let mut state = ListState::default();
        state.select(Some(drawer.selected));
        frame.render_stateful_widget(list, chunks[2], &mut state);
    }

    fn render_actions(frame: &mut Frame, area: Rect, theme: &Theme) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        frame.render_widget(
            Paragraph::new(Span::styled(
                "✕ Close [m]",
                Style::default().add_modifier(Modifier::DIM),
            )),
            halves[0],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Logout [x]",
                Style::default()
                    .fg(theme.loss)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(ratatui::layout::Alignment::Right),
            halves[1],
        );
    }

    fn render_identity(
        frame: &mut Frame,
        area: Rect,
        drawer: &DrawerState,
        tick: u64,
        theme: &Theme,
    ) {
        let lines = if drawer.is_loading() {
            vec![Line::from(Span::styled(
                theme.spinner(tick),
                Style::default().fg(theme.heading),
            ))]
        } else {
            let mut lines = vec![
                Line::from(Span::styled(drawer.display_name().to_string(), theme.heading())),
                Line::from(Span::styled(
                    USER_TAGLINE,
                    Style::default().add_modifier(Modifier::DIM),
                )),
            ];
            let photo = drawer.photo_url();
            if !photo.is_empty() {
                lines.push(Line::from(Span::styled(
                    super::truncate(photo, area.width.saturating_sub(1) as usize),
                    Style::default().add_modifier(Modifier::DIM | Modifier::UNDERLINED),
                )));
            }
            lines
        };

        frame.render_widget(Paragraph::new(lines), area);
    }
}
