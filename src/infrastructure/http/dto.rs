//! Wire shapes of the Alpha Vantage and exchange-rate responses.
//!
//! Everything the upstream might omit is optional here; the conversions into domain
//! types decide which omissions are errors.

use crate::domain::errors::{FetchError, FetchResult};
use crate::domain::market_data::{parse_decimal, DailyBar, RateTable, Symbol};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Free-text explanation Alpha Vantage sends instead of data (throttling, bad key, bad symbol).
#[derive(Debug, Default, Clone, Deserialize)]
pub struct UpstreamNotice {
    #[serde(rename = "Information")]
    pub information: Option<String>,
    #[serde(rename = "Note")]
    pub note: Option<String>,
    #[serde(rename = "Error Message")]
    pub error_message: Option<String>,
}

impl UpstreamNotice {
    pub fn describe(&self) -> Option<&str> {
        self.error_message
            .as_deref()
            .or(self.note.as_deref())
            .or(self.information.as_deref())
    }

    fn missing_key(&self, key: &str) -> FetchError {
        match self.describe() {
            Some(text) => {
                FetchError::MalformedResponse(format!("missing \"{key}\" (upstream said: {text})"))
            }
            None => FetchError::MalformedResponse(format!("missing \"{key}\"")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SymbolMatch {
    #[serde(rename = "1. symbol")]
    pub symbol: Option<String>,
    #[serde(rename = "2. name")]
    pub name: Option<String>,
    #[serde(rename = "4. region")]
    pub region: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SymbolSearchResponse {
    #[serde(rename = "bestMatches")]
    pub best_matches: Option<Vec<SymbolMatch>>,
    #[serde(flatten)]
    pub notice: UpstreamNotice,
}

impl SymbolSearchResponse {
    /// Symbol of the match at index 0. No ranking, no disambiguation.
    pub fn first_symbol(&self, keywords: &str) -> FetchResult<Symbol> {
        self.best_matches
            .as_ref()
            .and_then(|matches| matches.first())
            .and_then(|first| first.symbol.clone())
            .and_then(|symbol| Symbol::new(symbol).ok())
            .ok_or_else(|| FetchError::NoSymbolMatch(keywords.to_string()))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimeSeriesDailyResponse {
    #[serde(rename = "Time Series (Daily)")]
    pub series: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub notice: UpstreamNotice,
}

impl TimeSeriesDailyResponse {
    /// The first `limit` dated entries, in the order the upstream sent them.
    pub fn into_daily_bars(self, limit: usize) -> FetchResult<Vec<DailyBar>> {
        let series = match self.series {
            Some(series) => series,
            None => return Err(self.notice.missing_key("Time Series (Daily)")),
        };

        Ok(series
            .into_iter()
            .take(limit)
            .map(|(date, fields)| daily_bar(date, &fields))
            .collect())
    }
}

fn daily_bar(date: String, fields: &Value) -> DailyBar {
    DailyBar::new(
        date,
        decimal_field(fields, "1. open"),
        decimal_field(fields, "2. high"),
        decimal_field(fields, "3. low"),
        decimal_field(fields, "4. close"),
        decimal_field(fields, "5. volume"),
    )
}

/// Alpha Vantage sends numbers as strings; a missing or odd field turns into NaN.
fn decimal_field(fields: &Value, key: &str) -> f64 {
    match fields.get(key) {
        Some(Value::String(text)) => parse_decimal(text),
        Some(Value::Number(number)) => number.as_f64().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRatesResponse {
    pub base: Option<String>,
    pub date: Option<String>,
    pub rates: Option<Map<String, Value>>,
}

impl ExchangeRatesResponse {
    pub fn into_rate_table(self) -> FetchResult<RateTable> {
        let rates = self
            .rates
            .ok_or_else(|| FetchError::MalformedResponse("missing \"rates\"".to_string()))?;

        Ok(rates
            .into_iter()
            .map(|(code, rate)| (code, rate.as_f64().unwrap_or(f64::NAN)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::decode_json;

    #[test]
    fn canned_daily_entry_parses_exactly() {
        let body = r#"{
            "Meta Data": {"2. Symbol": "AAPL"},
            "Time Series (Daily)": {
                "2024-01-02": {
                    "1. open": "100.5",
                    "2. high": "101.0",
                    "3. low": "99.0",
                    "4. close": "100.0",
                    "5. volume": "123456"
                }
            }
        }"#;
        let response: TimeSeriesDailyResponse = decode_json(body).unwrap();
        let bars = response.into_daily_bars(10).unwrap();
        assert_eq!(bars, vec![DailyBar::new("2024-01-02".into(), 100.5, 101.0, 99.0, 100.0, 123456.0)]);
    }

    #[test]
    fn entries_keep_response_order() {
        let body = r#"{"Time Series (Daily)": {
            "2024-01-05": {"1. open": "1"},
            "2024-01-03": {"1. open": "2"},
            "2024-01-04": {"1. open": "3"}
        }}"#;
        let response: TimeSeriesDailyResponse = decode_json(body).unwrap();
        let dates: Vec<String> =
            response.into_daily_bars(10).unwrap().into_iter().map(|bar| bar.date).collect();
        assert_eq!(dates, ["2024-01-05", "2024-01-03", "2024-01-04"]);
    }

    #[test]
    fn non_numeric_fields_become_nan() {
        let body = r#"{"Time Series (Daily)": {
            "2024-01-02": {"1. open": "abc", "2. high": "2", "3. low": null, "4. close": 4}
        }}"#;
        let response: TimeSeriesDailyResponse = decode_json(body).unwrap();
        let bar = &response.into_daily_bars(10).unwrap()[0];
        assert!(bar.open.is_nan());
        assert_eq!(bar.high, 2.0);
        assert!(bar.low.is_nan());
        assert_eq!(bar.close, 4.0);
        assert!(bar.volume.is_nan());
    }

    #[test]
    fn missing_series_reports_upstream_notice() {
        let body = r#"{"Information": "Our standard API rate limit is 25 requests per day."}"#;
        let response: TimeSeriesDailyResponse = decode_json(body).unwrap();
        let err = response.into_daily_bars(10).unwrap_err();
        assert_eq!(
            err,
            FetchError::MalformedResponse(
                "missing \"Time Series (Daily)\" (upstream said: Our standard API rate limit is 25 requests per day.)"
                    .into()
            )
        );
    }

    #[test]
    fn first_match_wins() {
        let body = r#"{"bestMatches": [
            {"1. symbol": "MSFT", "2. name": "Microsoft Corporation"},
            {"1. symbol": "MSF.DEX", "2. name": "Microsoft Corporation"}
        ]}"#;
        let response: SymbolSearchResponse = decode_json(body).unwrap();
        assert_eq!(response.first_symbol("Microsoft").unwrap(), Symbol::from("MSFT"));
    }

    #[test]
    fn empty_absent_or_blank_matches_are_no_match() {
        for body in [
            r#"{"bestMatches": []}"#,
            r#"{"Note": "Thank you for using Alpha Vantage!"}"#,
            r#"{"bestMatches": [{"2. name": "No symbol here"}]}"#,
            r#"{"bestMatches": [{"1. symbol": ""}]}"#,
        ] {
            let response: SymbolSearchResponse = decode_json(body).unwrap();
            assert_eq!(
                response.first_symbol("Nothing Corp").unwrap_err(),
                FetchError::NoSymbolMatch("Nothing Corp".into())
            );
        }
    }

    #[test]
    fn notice_prefers_error_message() {
        let notice = UpstreamNotice {
            information: Some("info".into()),
            note: Some("note".into()),
            error_message: Some("Invalid API call.".into()),
        };
        assert_eq!(notice.describe(), Some("Invalid API call."));
        assert_eq!(UpstreamNotice::default().describe(), None);
    }

    #[test]
    fn rate_table_keeps_upstream_order() {
        let body = r#"{"base": "USD", "date": "2024-01-02", "rates": {"USD": 1, "EUR": 0.92, "AED": 3.67}}"#;
        let response: ExchangeRatesResponse = decode_json(body).unwrap();
        let table = response.into_rate_table().unwrap();
        assert_eq!(table.codes().collect::<Vec<_>>(), ["USD", "EUR", "AED"]);
        assert_eq!(table.get("EUR"), Some(0.92));
    }

    #[test]
    fn missing_rates_is_malformed() {
        let response: ExchangeRatesResponse = decode_json(r#"{"result": "error"}"#).unwrap();
        assert!(matches!(response.into_rate_table(), Err(FetchError::MalformedResponse(_))));
    }
}
