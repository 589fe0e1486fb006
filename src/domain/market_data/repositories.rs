use crate::domain::errors::FetchResult;
use crate::domain::market_data::{DailyBar, RateTable, Symbol};

// The app runs on a single browser thread, so none of these futures need to be Send.

/// Resolves free-text company names to ticker symbols.
#[allow(async_fn_in_trait)]
pub trait SymbolSearchRepository {
    /// Symbol of the first match the upstream returns for `keywords`.
    async fn search_symbol(&self, keywords: &str) -> FetchResult<Symbol>;
}

/// Source of daily price history.
#[allow(async_fn_in_trait)]
pub trait PriceHistoryRepository {
    /// Most recent daily bars in upstream order, at most `MAX_DAILY_BARS` of them.
    async fn daily_bars(&self, symbol: &Symbol) -> FetchResult<Vec<DailyBar>>;
}

/// Source of the latest USD conversion rates.
#[allow(async_fn_in_trait)]
pub trait ExchangeRateRepository {
    async fn latest_rates(&self) -> FetchResult<RateTable>;
}
