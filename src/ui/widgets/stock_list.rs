//! Watchlist widget.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use super::truncate;
use crate::state::{Stock, Store};
use crate::ui::Theme;

/// Watchlist widget.
pub struct StockList;

impl StockList {
    /// Render the watchlist.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store, theme: &Theme) {
        let stocks = &store.stocks;

        let mut title = format!(" Watchlist ({}) ", stocks.stocks.len());
        if stocks.loading {
            title.push_str(&format!("{} ", theme.spinner(store.app.tick)));
        }
        let block = Block::default()
            .title(Span::styled(title, theme.heading()))
            .borders(Borders::ALL)
            .border_style(theme.border())
            .style(theme.base());

        if stocks.stocks.is_empty() {
            let hint = Paragraph::new(vec![
                Line::from(""),
                Line::from("Your watchlist is empty."),
                Line::from(Span::styled(
                    "Add [[watchlist]] entries to config.toml",
                    Style::default().add_modifier(Modifier::DIM),
                )),
            ])
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(hint, area);
            return;
        }

        // Name column takes what the fixed columns leave over.
        let name_width = (area.width as usize).saturating_sub(2 + 2 + 14 + 12 + 2).max(4);

        let header_cells = ["Company", "Price", "Change"]
            .iter()
            .map(|h| Cell::from(*h).style(theme.heading()));
        let header = Row::new(header_cells).height(1).bottom_margin(1);

        let rows = stocks.stocks.iter().map(|stock| Self::row(stock, name_width, theme));

        let table = Table::new(
            rows,
            [
                Constraint::Min(4),
                Constraint::Length(14),
                Constraint::Length(12),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(theme.selected())
        .highlight_symbol("▶ ");

        let mut state = TableState::default();
        state.select(stocks.selected_index);

        frame.render_stateful_widget(table, area, &mut state);
    }

    fn row<'a>(stock: &Stock, name_width: usize, theme: &Theme) -> Row<'a> {
        let gaining = stock.is_gaining();
        let change_style = Style::default().fg(theme.change_color(gaining));

        Row::new(vec![
            Cell::from(truncate(&stock.label(), name_width)).style(theme.heading()),
            Cell::from(stock.price_label()),
            Cell::from(Line::from(vec![
                Span::styled(format!("{} ", theme.caret(gaining)), change_style),
                Span::styled(stock.change_label(), change_style),
            ])),
        ])
        .height(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::widgets::render_text;
    use rust_decimal_macros::dec;
    use tokio::sync::mpsc;

    fn draw(store: &Store) -> String {
        let theme = Theme::default();
        render_text(60, 8, |f| StockList::render(f, f.area(), store, &theme))
    }

    #[test]
    fn test_renders_carets_and_changes() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut config = Config::default();
        config.watchlist = vec![
            Stock {
                ticker: "NVDA".into(),
                company_name: "NVIDIA".into(),
                price: dec!(120.5),
                price_change_percentage: dec!(3.1),
                image: None,
            },
            Stock {
                ticker: "INTC".into(),
                company_name: "Intel".into(),
                price: dec!(30),
                price_change_percentage: dec!(-1.256),
                image: None,
            },
        ];
        let store = Store::new(tx, &config);

        let text = draw(&store);
        assert!(text.contains("NVIDIA (NVDA)"));
        assert!(text.contains("$120.5"));
        assert!(text.contains("▲ 3.10%"));
        assert!(text.contains("▼ -1.26%"));
    }

    #[test]
    fn test_empty_watchlist_hint() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let store = Store::new(tx, &Config::default());

        assert!(draw(&store).contains("Your watchlist is empty."));
    }
}
