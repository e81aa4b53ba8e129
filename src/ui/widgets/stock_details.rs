//! Stock details screen.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rust_decimal::Decimal;

use crate::state::{Store, format_change};
use crate::ui::Theme;

/// Stock details screen.
pub struct StockDetails;

impl StockDetails {
    /// Render details for `ticker`, using the watchlist entry when present.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        store: &Store,
        ticker: &str,
        percentage_change: Decimal,
        theme: &Theme,
    ) {
        let gaining = percentage_change > Decimal::ZERO;
        let change_style = Style::default()
            .fg(theme.change_color(gaining))
            .add_modifier(Modifier::BOLD);

        let stock = store.stocks.stocks.iter().find(|s| s.ticker == ticker);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(ticker.to_string(), theme.heading())),
        ];
        if let Some(stock) = stock {
            lines.push(Line::from(stock.company_name.clone()));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(stock.price_label(), theme.heading())));
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", theme.caret(gaining)), change_style),
            Span::styled(format_change(percentage_change), change_style),
        ]));

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(Span::styled(" Stock Details ", theme.heading()))
                .borders(Borders::ALL)
                .border_style(theme.border())
                .style(theme.base()),
        );

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::state::Stock;
    use crate::ui::widgets::render_text;
    use rust_decimal_macros::dec;
    use tokio::sync::mpsc;

    #[test]
    fn test_renders_route_params() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut config = Config::default();
        config.watchlist = vec![Stock {
            ticker: "TSLA".into(),
            company_name: "Tesla".into(),
            price: dec!(250.00),
            price_change_percentage: dec!(-4.5),
            image: None,
        }];
        let store = Store::new(tx, &config);
        let theme = Theme::default();

        let text = render_text(40, 10, |f| {
            StockDetails::render(f, f.area(), &store, "TSLA", dec!(-4.5), &theme)
        });
        assert!(text.contains("Tesla"));
        assert!(text.contains("$250.00"));
        assert!(text.contains("▼ -4.50%"));

        let text = render_text(40, 10, |f| {
            StockDetails::render(f, f.area(), &store, "UNKNOWN", dec!(0), &theme)
        });
        assert!(text.contains("UNKNOWN"));
        assert!(text.contains("▼ 0.00%"));

        let text = render_text(40, 10, |f| {
            StockDetails::render(f, f.area(), &store, "TSLA", dec!(-1.256), &theme)
        });
        assert!(text.contains("▼ -1.26%"));
    }
}
