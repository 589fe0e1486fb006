use crate::domain::errors::FetchResult;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{
    DailyBar,
    repositories::{ExchangeRateRepository, PriceHistoryRepository, SymbolSearchRepository},
};
use crate::ui_state::{LoadingGuard, UiState};
use crate::{log_debug, log_error, log_info};
use leptos::*;

/// Use Case: company name -> ticker -> recent daily bars.
#[derive(Debug, Clone)]
pub struct FetchStockDataUseCase<S, P> {
    symbols: S,
    prices: P,
}

impl<S, P> FetchStockDataUseCase<S, P>
where
    S: SymbolSearchRepository,
    P: PriceHistoryRepository,
{
    pub fn new(symbols: S, prices: P) -> Self {
        Self { symbols, prices }
    }

    /// Resolve the name and fetch its bars. Stops before the price request if nothing matched.
    pub async fn lookup(&self, company_name: &str) -> FetchResult<Vec<DailyBar>> {
        let symbol = self.symbols.search_symbol(company_name).await?;
        log_debug!(
            LogComponent::Application("FetchStockData"),
            "\"{}\" resolved to {}",
            company_name,
            symbol
        );
        self.prices.daily_bars(&symbol).await
    }

    /// Run a lookup for the current input and publish the result.
    ///
    /// `loading` is high for the whole call. On failure the previous rows stay on screen
    /// and the error only goes to the log.
    pub async fn execute(&self, state: UiState) {
        let _loading = LoadingGuard::engage(state.loading);
        let company_name = state.company_name.get_untracked();

        match self.lookup(&company_name).await {
            Ok(bars) => {
                log_info!(
                    LogComponent::Application("FetchStockData"),
                    "✅ Showing {} daily bars for \"{}\"",
                    bars.len(),
                    company_name
                );
                state.stock_data.set(bars);
            }
            Err(e) => {
                log_error!(
                    LogComponent::Application("FetchStockData"),
                    "❌ Error fetching data: {}",
                    e
                );
            }
        }
    }
}

/// Use Case: one-shot load of the USD rate table.
#[derive(Debug, Clone)]
pub struct LoadCurrencyRatesUseCase<R> {
    rates: R,
}

impl<R> LoadCurrencyRatesUseCase<R>
where
    R: ExchangeRateRepository,
{
    pub fn new(rates: R) -> Self {
        Self { rates }
    }

    /// Replace the rate table on success; on failure log and keep whatever was there.
    pub async fn execute(&self, state: UiState) {
        match self.rates.latest_rates().await {
            Ok(table) => state.currency_rates.set(table),
            Err(e) => {
                log_error!(
                    LogComponent::Application("LoadCurrencyRates"),
                    "❌ Error fetching currency rates: {}",
                    e
                );
            }
        }
    }
}
