//! Response schemas for the remote endpoints.
//!
//! Bodies are validated before use: anything that does not match the
//! expected shape is a [`Error::Schema`], which callers treat like any
//! other fetch failure.

use crate::config::MalformedItems;
use crate::error::{Error, Result};
use crate::state::{NewsItem, Stock};
use serde_json::Value;

/// Parse a news page body of the form `{ "data": [ {title, ...}, ... ] }`.
///
/// A missing or `null` `data` is an empty page (end of feed).
pub fn parse_news_page(body: &str, policy: MalformedItems) -> Result<Vec<NewsItem>> {
    let Some(raw_items) = data_array(body)? else {
        return Ok(Vec::new());
    };

    let total = raw_items.len();
    let mut items = Vec::with_capacity(total);
    for (index, raw) in raw_items.into_iter().enumerate() {
        match validate_news_item(raw) {
            Ok(item) => items.push(item),
            Err(reason) => match policy {
                MalformedItems::Reject => {
                    return Err(Error::schema(format!("item {index}: {reason}")));
                }
                MalformedItems::Skip => {
                    tracing::warn!(index, %reason, "Dropping malformed news item");
                }
            },
        }
    }

    if total > 0 && items.is_empty() {
        return Err(Error::schema(format!("all {total} items are malformed")));
    }
    Ok(items)
}

/// Parse a watchlist body of the form `{ "data": [stock, ...] }`.
pub fn parse_stock_list(body: &str) -> Result<Vec<Stock>> {
    let raw_items =
        data_array(body)?.ok_or_else(|| Error::schema("watchlist response has no data"))?;

    raw_items
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            serde_json::from_value(raw).map_err(|e| Error::schema(format!("stock {index}: {e}")))
        })
        .collect()
}

/// Extract the `data` array. `Ok(None)` when absent or null.
fn data_array(body: &str) -> Result<Option<Vec<Value>>> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| Error::schema(format!("response is not JSON: {e}")))?;

    let Value::Object(mut object) = value else {
        return Err(Error::schema("response body is not an object"));
    };

    match object.remove("data") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items)),
        Some(other) => Err(Error::schema(format!(
            "data must be an array, got {}",
            type_name(&other)
        ))),
    }
}

fn validate_news_item(raw: Value) -> std::result::Result<NewsItem, String> {
    let item: NewsItem = serde_json::from_value(raw).map_err(|e| e.to_string())?;
    if item.title.trim().is_empty() {
        return Err("title is empty".to_string());
    }
    Ok(item)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parses_items_in_order() {
        let body = r#"{"data":[{"title":"One","source":"A"},{"title":"Two","url":"https://x"}]}"#;
        let items = parse_news_page(body, MalformedItems::Skip).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "One");
        assert_eq!(items[0].source.as_deref(), Some("A"));
        assert_eq!(items[1].url.as_deref(), Some("https://x"));
    }

    #[test]
    fn test_end_of_feed_shapes() {
        for body in [r#"{"data":[]}"#, r#"{"data":null}"#, r#"{"status":"ok"}"#] {
            assert_eq!(parse_news_page(body, MalformedItems::Skip).unwrap(), vec![]);
        }
    }

    #[test]
    fn test_shape_violations_are_errors() {
        for body in [
            "<html>",
            r#"[{"title":"x"}]"#,
            r#"{"data":{"title":"x"}}"#,
            r#"{"data":"none"}"#,
        ] {
            let err = parse_news_page(body, MalformedItems::Skip).unwrap_err();
            assert!(matches!(err, Error::Schema(_)), "{body}: {err}");
        }
    }

    #[test]
    fn test_skip_policy_drops_bad_items() {
        let body = r#"{"data":[{"title":"Good"},{"source":"no title"},{"title":"  "},{"title":7},{"title":"Also good"}]}"#;
        let items = parse_news_page(body, MalformedItems::Skip).unwrap();

        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Good", "Also good"]);
    }

    #[test]
    fn test_reject_policy_fails_page() {
        let body = r#"{"data":[{"title":"Good"},{"source":"no title"}]}"#;
        let err = parse_news_page(body, MalformedItems::Reject).unwrap_err();
        assert!(err.to_string().contains("item 1"));
    }

    #[test]
    fn test_all_malformed_is_not_end_of_feed() {
        let body = r#"{"data":[{"source":"a"},{"source":"b"}]}"#;
        assert!(parse_news_page(body, MalformedItems::Skip).is_err());
    }

    #[test]
    fn test_parse_stock_list() {
        let body = r#"{"data":[{"ticker":"NVDA","companyName":"NVIDIA","price":"120.5","priceChangePercentage":3.1}]}"#;
        let stocks = parse_stock_list(body).unwrap();

        assert_eq!(stocks.len(), 1);
        assert_eq!(stocks[0].company_name, "NVIDIA");
        assert_eq!(stocks[0].price, dec!(120.5));

        assert!(parse_stock_list(r#"{"data":[{"ticker":"X"}]}"#).is_err());
        assert!(parse_stock_list(r#"{}"#).is_err());
    }
}
