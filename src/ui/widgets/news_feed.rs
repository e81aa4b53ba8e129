//! News feed widget.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::truncate;
use crate::state::{NewsItem, NewsScreen};
use crate::ui::Theme;

/// News feed widget.
pub struct NewsFeed;

impl NewsFeed {
    /// Render the mounted news screen.
    pub fn render(frame: &mut Frame, area: Rect, screen: &NewsScreen, tick: u64, theme: &Theme) {
        let feed = &screen.feed;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .style(theme.base());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let footer_height =
            u16::from(feed.loading() && !feed.refreshing() && !feed.items().is_empty());
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),             // Header
                Constraint::Min(0),                // Body
                Constraint::Length(footer_height), // Footer
            ])
            .split(inner);

        Self::render_header(frame, chunks[0], screen, tick, theme);

        if feed.loading() && feed.items().is_empty() {
            Self::render_centered(
                frame,
                chunks[1],
                Line::from(Span::styled(
                    theme.spinner(tick),
                    Style::default().fg(theme.heading),
                )),
            );
        } else if let Some(error) = feed.error() {
            Self::render_centered(
                frame,
                chunks[1],
                Line::from(Span::styled(
                    error,
                    Style::default()
                        .fg(theme.error)
                        .add_modifier(Modifier::BOLD),
                )),
            );
        } else if feed.items().is_empty() {
            Self::render_centered(
                frame,
                chunks[1],
                Line::from(Span::styled(
                    "No news right now.",
                    Style::default().add_modifier(Modifier::DIM),
                )),
            );
        } else {
            Self::render_list(frame, chunks[1], screen, theme);
        }

        if footer_height > 0 {
            let footer = Paragraph::new(Line::from(vec![
                Span::styled(theme.spinner(tick), Style::default().fg(theme.heading)),
                Span::raw(" Loading more…"),
            ]))
            .alignment(Alignment::Center);
            frame.render_widget(footer, chunks[2]);
        }
    }

    fn render_header(frame: &mut Frame, area: Rect, screen: &NewsScreen, tick: u64, theme: &Theme) {
        let mut spans = vec![Span::styled("Top Crypto News", theme.heading())];
        if screen.feed.refreshing() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("{} refreshing", theme.spinner(tick)),
                Style::default().add_modifier(Modifier::ITALIC),
            ));
        } else if let Some(updated) = screen.feed.last_updated() {
            spans.push(Span::styled(
                format!("  updated {}", updated.with_timezone(&chrono::Local).format("%H:%M")),
                Style::default().add_modifier(Modifier::DIM),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_list(frame: &mut Frame, area: Rect, screen: &NewsScreen, theme: &Theme) {
        let width = area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = screen
            .feed
            .items()
            .iter()
            .map(|item| Self::list_item(item, width, theme))
            .collect();

        let list = List::new(items)
            .highlight_style(theme.selected())
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        state.select(screen.selected_index);

        frame.render_stateful_widget(list, area, &mut state);
    }

    fn list_item<'a>(item: &NewsItem, width: usize, theme: &Theme) -> ListItem<'a> {
        let mut lines = vec![Line::from(Span::styled(
            truncate(&item.title, width),
            theme.heading(),
        ))];

        let detail = match (&item.source, &item.description) {
            (Some(source), Some(description)) => Some(format!("{source} · {description}")),
            (Some(source), None) => Some(source.clone()),
            (None, Some(description)) => Some(description.clone()),
            (None, None) => None,
        };
        if let Some(detail) = detail {
            lines.push(Line::from(Span::styled(
                truncate(&detail, width),
                Style::default().add_modifier(Modifier::DIM),
            )));
        }

        ListItem::new(lines)
    }

    fn render_centered(frame: &mut Frame, area: Rect, line: Line<'_>) {
        let top = area.height.saturating_sub(1) / 2;
        let area = Rect {
            y: area.y + top,
            height: area.height.saturating_sub(top),
            ..area
        };
        let paragraph = Paragraph::new(line)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FEED_ERROR_MESSAGE, FeedEvent};
    use crate::ui::widgets::render_text;

    fn draw(screen: &NewsScreen) -> String {
        let theme = Theme::default();
        render_text(80, 12, |f| NewsFeed::render(f, f.area(), screen, 0, &theme))
    }

    fn loaded(count: usize) -> NewsScreen {
        let mut screen = NewsScreen::mount();
        let fetch = screen
            .apply(FeedEvent::LoadPage {
                page: 1,
                refresh: false,
            })
            .unwrap();
        screen.apply(FeedEvent::PageLoaded {
            request: fetch.request.id,
            items: (0..count)
                .map(|i| NewsItem::titled(format!("Headline {i}")))
                .collect(),
        });
        screen
    }

    #[test]
    fn test_first_load_shows_spinner_only() {
        let mut screen = NewsScreen::mount();
        screen.apply(FeedEvent::LoadPage {
            page: 1,
            refresh: false,
        });

        let text = draw(&screen);
        assert!(text.contains("Top Crypto News"));
        assert!(text.contains("⠋"));
        assert!(!text.contains("Loading more"));
    }

    #[test]
    fn test_items_and_footer_while_loading_next_page() {
        let mut screen = loaded(3);
        assert!(!draw(&screen).contains("Loading more"));

        screen.apply(FeedEvent::EndReached);
        let text = draw(&screen);
        assert!(text.contains("Headline 0"));
        assert!(text.contains("Headline 2"));
        assert!(text.contains("Loading more…"));
    }

    #[test]
    fn test_refresh_shows_header_indicator_not_footer() {
        let mut screen = loaded(2);
        screen.apply(FeedEvent::Refresh);

        let text = draw(&screen);
        assert!(text.contains("refreshing"));
        assert!(!text.contains("Loading more"));
        assert!(text.contains("Headline 1"));
    }

    #[test]
    fn test_error_replaces_list() {
        let mut screen = loaded(2);
        let fetch = screen.apply(FeedEvent::EndReached).unwrap();
        screen.apply(FeedEvent::PageFailed {
            request: fetch.request.id,
        });

        let text = draw(&screen);
        assert!(text.contains(FEED_ERROR_MESSAGE));
        assert!(!text.contains("Headline 0"));
    }
}
