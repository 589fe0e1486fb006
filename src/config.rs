use crate::domain::market_data::{BASE_CURRENCY, MAX_DAILY_BARS};
use once_cell::sync::Lazy;

pub const DEFAULT_MARKET_DATA_URL: &str = "https://www.alphavantage.co/query";
pub const DEFAULT_EXCHANGE_RATES_URL: &str = "https://api.exchangerate-api.com/v4/latest/USD";

/// Alpha Vantage's public demo key, used when no key is baked in at build time.
pub const DEMO_API_KEY: &str = "demo";

/// Endpoints and the Alpha Vantage key. Everything ships inside the wasm bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub market_data_url: String,
    pub api_key: String,
    pub exchange_rates_url: String,
    pub max_daily_bars: usize,
    pub default_currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            market_data_url: DEFAULT_MARKET_DATA_URL.to_string(),
            api_key: option_env!("STOCK_LOOKUP_API_KEY").unwrap_or(DEMO_API_KEY).to_string(),
            exchange_rates_url: DEFAULT_EXCHANGE_RATES_URL.to_string(),
            max_daily_bars: MAX_DAILY_BARS,
            default_currency: BASE_CURRENCY.to_string(),
        }
    }
}

impl AppConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_market_data_url(mut self, url: impl Into<String>) -> Self {
        self.market_data_url = url.into();
        self
    }

    pub fn with_exchange_rates_url(mut self, url: impl Into<String>) -> Self {
        self.exchange_rates_url = url.into();
        self
    }
}

static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::default);

pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_endpoints() {
        let config = AppConfig::default();
        assert_eq!(config.market_data_url, "https://www.alphavantage.co/query");
        assert_eq!(config.exchange_rates_url, "https://api.exchangerate-api.com/v4/latest/USD");
        assert_eq!(config.max_daily_bars, 10);
        assert_eq!(config.default_currency, "USD");
        assert!(!config.api_key.is_empty());
    }

    #[test]
    fn builders_override_fields() {
        let config = AppConfig::default()
            .with_api_key("KEY")
            .with_market_data_url("http://localhost/query");
        assert_eq!(config.api_key, "KEY");
        assert_eq!(config.market_data_url, "http://localhost/query");
    }
}
