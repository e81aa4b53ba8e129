//! Help panel widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::config::KeyBindings;
use crate::ui::Theme;
use crate::ui::layout::centered_rect;

/// Help panel showing keybindings.
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel.
    pub fn render(frame: &mut Frame, area: Rect, keys: &KeyBindings, theme: &Theme) {
        let popup_area = centered_rect(60, 80, area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let section = |title: &'static str| {
            Line::from(Span::styled(
                title,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
        };
        let binding = |key: String, description: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {key:<10}"), Style::default().fg(theme.heading)),
                Span::raw(description),
            ])
        };

        let help_text = vec![
            section("Navigation"),
            Line::from(""),
            binding(format!("{}/↓", keys.down), "Move down"),
            binding(format!("{}/↑", keys.up), "Move up"),
            binding("Home/End".into(), "Go to top/bottom"),
            binding(keys.select.clone(), "Open selected item"),
            binding(keys.back.clone(), "Go back / close"),
            Line::from(""),
            section("Home"),
            Line::from(""),
            binding(keys.stocks.clone(), "Stocks tab"),
            binding(keys.news.clone(), "News tab"),
            binding("Tab".into(), "Switch tabs"),
            binding(keys.refresh.clone(), "Refresh"),
            binding(keys.drawer.clone(), "Open/close menu"),
            binding(keys.logout.clone(), "Logout (in menu)"),
            Line::from(""),
            section("General"),
            Line::from(""),
            binding(keys.help.clone(), "Toggle help"),
            binding(keys.quit.clone(), "Quit"),
        ];

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.accent)),
            )
            .style(theme.base());

        frame.render_widget(help, popup_area);
    }
}
