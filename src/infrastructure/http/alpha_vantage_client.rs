use super::dto::{SymbolSearchResponse, TimeSeriesDailyResponse};
use super::get_json;
use crate::config::AppConfig;
use crate::domain::errors::FetchResult;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{
    DailyBar, Symbol,
    repositories::{PriceHistoryRepository, SymbolSearchRepository},
};
use crate::{log_debug, log_info, log_warn};
use strum::IntoStaticStr;

/// The two Alpha Vantage functions this app calls.
#[derive(Debug, Clone, PartialEq, Eq, IntoStaticStr)]
pub enum AlphaVantageQuery {
    #[strum(serialize = "SYMBOL_SEARCH")]
    SymbolSearch { keywords: String },
    #[strum(serialize = "TIME_SERIES_DAILY")]
    TimeSeriesDaily { symbol: Symbol },
}

impl AlphaVantageQuery {
    pub fn function(&self) -> &'static str {
        self.into()
    }

    /// Query string pairs, `apikey` last.
    pub fn params<'a>(&'a self, api_key: &'a str) -> Vec<(&'static str, &'a str)> {
        let (name, value) = match self {
            Self::SymbolSearch { keywords } => ("keywords", keywords.as_str()),
            Self::TimeSeriesDaily { symbol } => ("symbol", symbol.value()),
        };
        vec![("function", self.function()), (name, value), ("apikey", api_key)]
    }
}

/// Alpha Vantage REST client: symbol search plus daily time series.
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    base_url: String,
    api_key: String,
    max_daily_bars: usize,
}

impl AlphaVantageClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.market_data_url.clone(),
            api_key: config.api_key.clone(),
            max_daily_bars: config.max_daily_bars,
        }
    }

    async fn query<T>(&self, query: &AlphaVantageQuery) -> FetchResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        get_json(&self.base_url, &query.params(&self.api_key)).await
    }
}

impl SymbolSearchRepository for AlphaVantageClient {
    async fn search_symbol(&self, keywords: &str) -> FetchResult<Symbol> {
        log_info!(
            LogComponent::Infrastructure("AlphaVantage"),
            "🔎 Searching symbol for \"{}\"",
            keywords
        );

        let query = AlphaVantageQuery::SymbolSearch { keywords: keywords.to_string() };
        let response: SymbolSearchResponse = self.query(&query).await?;

        log_debug!(
            LogComponent::Infrastructure("AlphaVantage"),
            "Symbol response: {} matches",
            response.best_matches.as_ref().map_or(0, Vec::len)
        );
        if let Some(notice) = response.notice.describe() {
            log_warn!(LogComponent::Infrastructure("AlphaVantage"), "Upstream notice: {}", notice);
        }

        response.first_symbol(keywords)
    }
}

impl PriceHistoryRepository for AlphaVantageClient {
    async fn daily_bars(&self, symbol: &Symbol) -> FetchResult<Vec<DailyBar>> {
        log_info!(
            LogComponent::Infrastructure("AlphaVantage"),
            "📈 Fetching daily series for {}",
            symbol
        );

        let query = AlphaVantageQuery::TimeSeriesDaily { symbol: symbol.clone() };
        let response: TimeSeriesDailyResponse = self.query(&query).await?;
        let bars = response.into_daily_bars(self.max_daily_bars)?;

        log_info!(
            LogComponent::Infrastructure("AlphaVantage"),
            "✅ Parsed {} daily bars for {}",
            bars.len(),
            symbol
        );

        Ok(bars)
    }
}
