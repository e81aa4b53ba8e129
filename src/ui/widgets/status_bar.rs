//! Status bar widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{Identity, Store};
use crate::ui::Theme;

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let user = match &store.drawer.identity {
            Identity::Loading => Span::styled("…", Style::default().add_modifier(Modifier::DIM)),
            Identity::Ready(Some(_)) if !store.drawer.display_name().is_empty() => Span::styled(
                format!("● {}", store.drawer.display_name()),
                Style::default().fg(theme.gain),
            ),
            Identity::Ready(_) => Span::styled("○ Guest", Style::default().add_modifier(Modifier::DIM)),
        };

        let busy = store.stocks.loading || store.news.as_ref().is_some_and(|s| s.feed.loading());
        let loading = if busy {
            Span::styled(
                format!(" {} Loading... ", theme.spinner(store.app.tick)),
                Style::default().add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::raw("")
        };

        let help_hint = Span::styled(" Press ? for help ", Style::default().add_modifier(Modifier::DIM));

        let left_content = vec![
            Span::styled(
                " Cointrack ",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::raw(store.app.current_route().title()),
            Span::raw(" | "),
            user,
            loading,
        ];

        let status_line = Line::from(left_content);

        // Calculate padding for right-aligned help hint
        let left_len = status_line.width();
        let right_len = help_hint.width();
        let padding = (area.width as usize).saturating_sub(left_len + right_len);

        let mut full_line = status_line.spans;
        full_line.push(Span::raw(" ".repeat(padding)));
        full_line.push(help_hint);

        let paragraph = Paragraph::new(Line::from(full_line))
            .style(Style::default().fg(theme.foreground).bg(theme.selection));

        frame.render_widget(paragraph, area);
    }
}
