use derive_more::Constructor;
use serde::{Deserialize, Serialize};

/// Most rows kept from one price-history response.
pub const MAX_DAILY_BARS: usize = 10;

/// Currency every rate in a [`RateTable`] is quoted against.
pub const BASE_CURRENCY: &str = "USD";

/// One trading day of OHLCV data.
///
/// `date` is whatever key the upstream used (normally `YYYY-MM-DD`) and is not validated.
#[derive(Debug, Clone, PartialEq, Constructor, Serialize, Deserialize)]
pub struct DailyBar {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

#[derive(Debug, Clone, PartialEq, Constructor, Serialize, Deserialize)]
pub struct CurrencyRate {
    pub code: String,
    pub rate: f64,
}

/// Conversion rates from [`BASE_CURRENCY`], in the order the upstream listed them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    rates: Vec<CurrencyRate>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, code: &str) -> Option<f64> {
        self.rates.iter().find(|entry| entry.code == code).map(|entry| entry.rate)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.rates.iter().map(|entry| entry.code.as_str())
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// `1 USD equals <rate> <code>`, if the code is in the table.
    pub fn conversion_line(&self, code: &str) -> Option<String> {
        self.get(code)
            .map(|rate| format!("1 {} equals {} {}", BASE_CURRENCY, rate, code))
    }
}

impl FromIterator<(String, f64)> for RateTable {
    /// A repeated code overwrites the earlier rate in place.
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut table = RateTable::new();
        for (code, rate) in iter {
            match table.rates.iter_mut().find(|entry| entry.code == code) {
                Some(existing) => existing.rate = rate,
                None => table.rates.push(CurrencyRate::new(code, rate)),
            }
        }
        table
    }
}
