//! Stock watchlist state.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A stock on the watchlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    /// Ticker symbol.
    pub ticker: String,
    /// Company name.
    #[serde(alias = "companyName")]
    pub company_name: String,
    /// Last price.
    pub price: Decimal,
    /// Price change in percent.
    #[serde(alias = "priceChangePercentage")]
    pub price_change_percentage: Decimal,
    /// Logo URL.
    #[serde(default)]
    pub image: Option<String>,
}

impl Stock {
    /// Whether the price went up. Zero counts as a loss, as on the mobile app.
    pub fn is_gaining(&self) -> bool {
        self.price_change_percentage > Decimal::ZERO
    }

    /// `"Apple Inc. (AAPL)"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.company_name, self.ticker)
    }

    /// `"$189.30"`.
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }

    /// Change rounded to two decimals, e.g. `"-1.26%"`.
    pub fn change_label(&self) -> String {
        format_change(self.price_change_percentage)
    }
}

/// Format a percentage change with two decimals, rounding halves away from zero.
pub fn format_change(change: Decimal) -> String {
    let rounded = change.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}%")
}

/// State for the watchlist.
#[derive(Debug, Default)]
pub struct StockState {
    /// Stocks in display order.
    pub stocks: Vec<Stock>,
    /// Currently selected row.
    pub selected_index: Option<usize>,
    /// Whether a remote refresh is in progress.
    pub loading: bool,
    /// Last update timestamp.
    pub last_updated: Option<DateTime<Utc>>,
}

impl StockState {
    /// Create a watchlist seeded with `stocks`.
    pub fn with_stocks(stocks: Vec<Stock>) -> Self {
        let selected_index = if stocks.is_empty() { None } else { Some(0) };
        Self {
            stocks,
            selected_index,
            ..Default::default()
        }
    }

    /// Get the currently selected stock.
    pub fn selected_stock(&self) -> Option<&Stock> {
        self.selected_index.and_then(|i| self.stocks.get(i))
    }

    /// Replace the list, keeping the selection in range.
    pub fn replace(&mut self, stocks: Vec<Stock>) {
        self.stocks = stocks;
        self.selected_index = match (self.selected_index, self.stocks.len()) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.loading = false;
        self.last_updated = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn stock(ticker: &str, change: Decimal) -> Stock {
        Stock {
            ticker: ticker.to_string(),
            company_name: format!("{ticker} Corp"),
            price: dec!(10.50),
            price_change_percentage: change,
            image: None,
        }
    }

    #[test]
    fn test_labels() {
        let s = stock("AAPL", dec!(-1.256));
        assert_eq!(s.label(), "AAPL Corp (AAPL)");
        assert_eq!(s.price_label(), "$10.50");
        assert_eq!(s.change_label(), "-1.26%");
    }

    #[test]
    fn test_change_rounds_to_two_decimals() {
        assert_eq!(format_change(dec!(-1.256)), "-1.26%");
        assert_eq!(format_change(dec!(1.254)), "1.25%");
        assert_eq!(format_change(dec!(0.125)), "0.13%");
        assert_eq!(format_change(dec!(-0.125)), "-0.13%");
        assert_eq!(format_change(dec!(2.5)), "2.50%");
        assert_eq!(format_change(dec!(-4)), "-4.00%");
    }

    #[test]
    fn test_change_direction() {
        assert!(stock("UP", dec!(0.01)).is_gaining());
        assert!(!stock("FLAT", dec!(0)).is_gaining());
        assert!(!stock("DOWN", dec!(-3)).is_gaining());
    }

    #[test]
    fn test_accepts_numbers_and_strings() {
        let json = r#"[
            {"ticker":"AAPL","companyName":"Apple","price":189.3,"priceChangePercentage":"2.5"},
            {"ticker":"TSLA","company_name":"Tesla","price":"250","price_change_percentage":-4}
        ]"#;
        let stocks: Vec<Stock> = serde_json::from_str(json).unwrap();

        assert_eq!(stocks[0].price_change_percentage, dec!(2.5));
        assert_eq!(stocks[1].company_name, "Tesla");
        assert_eq!(stocks[1].price_change_percentage, dec!(-4));
    }

    #[test]
    fn test_replace_clamps_selection() {
        let mut state = StockState::with_stocks(vec![
            stock("A", dec!(1)),
            stock("B", dec!(1)),
            stock("C", dec!(1)),
        ]);
        state.selected_index = Some(2);
        state.loading = true;

        state.replace(vec![stock("D", dec!(1))]);
        assert_eq!(state.selected_stock().map(|s| s.ticker.as_str()), Some("D"));
        assert!(!state.loading);

        state.replace(Vec::new());
        assert_eq!(state.selected_index, None);
    }
}
