//! "Coming soon" screens for features that have not shipped yet.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::Route;
use crate::ui::Theme;

/// Placeholder screen.
pub struct Placeholder;

impl Placeholder {
    /// Headline for a placeholder route.
    pub fn message(route: &Route) -> &'static str {
        match route {
            Route::HelpSupport | Route::ProfileSettings => "Coming Very Soon!",
            _ => "Coming Soon!",
        }
    }

    /// Render the placeholder for `route`.
    pub fn render(frame: &mut Frame, area: Rect, route: &Route, tick: u64, theme: &Theme) {
        let accent = Style::default().fg(theme.accent);
        let top = area.height.saturating_sub(2) / 2;

        let mut lines = vec![Line::from(""); top.saturating_sub(1) as usize];
        lines.push(Line::from(Span::styled(
            Self::message(route),
            accent.add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(theme.spinner(tick), accent)));

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(Span::styled(format!(" {} ", route.title()), theme.heading()))
                .borders(Borders::ALL)
                .border_style(theme.border())
                .style(theme.base()),
        );

        frame.render_widget(paragraph, area);
    }
}
