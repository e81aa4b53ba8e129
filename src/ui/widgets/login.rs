//! Signed-out screen.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::Theme;

/// Signed-out screen.
pub struct LoginScreen;

impl LoginScreen {
    /// Render the login prompt.
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("Cointrack", theme.heading())),
            Line::from(Span::styled(
                "You are signed out.",
                Style::default().add_modifier(Modifier::DIM),
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("Press "),
                Span::styled("Enter", Style::default().fg(theme.accent)),
                Span::raw(" to sign in"),
            ]),
        ];

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .style(theme.base()),
        );
        frame.render_widget(paragraph, area);
    }
}
