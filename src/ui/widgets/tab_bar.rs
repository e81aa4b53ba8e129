//! Tab bar widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{HomeTab, Route, Store};
use crate::ui::Theme;

/// Tab bar widget.
pub struct TabBar;

impl TabBar {
    /// Render the home tabs, or a back hint on pushed screens.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let key_style = Style::default().add_modifier(Modifier::DIM);
        let mut spans = vec![Span::raw(" ")];

        match store.app.current_route() {
            Route::Home => {
                let tabs = [("1", "Stocks", HomeTab::Stocks), ("2", "News", HomeTab::News)];
                for (key, name, tab) in tabs {
                    let name_style = if store.app.home_tab == tab {
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                    } else {
                        Style::default().fg(theme.foreground)
                    };

                    spans.push(Span::styled(format!("[{key}] "), key_style));
                    spans.push(Span::styled(name, name_style));
                    spans.push(Span::raw("  "));
                }
                spans.push(Span::styled("[m] Menu", key_style));
            }
            Route::Login => {}
            route => {
                spans.push(Span::styled("[Esc] ", key_style));
                spans.push(Span::styled(format!("← {}", route.title()), theme.heading()));
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
