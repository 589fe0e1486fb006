use super::dto::ExchangeRatesResponse;
use super::get_json;
use crate::config::AppConfig;
use crate::domain::errors::FetchResult;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{RateTable, repositories::ExchangeRateRepository};
use crate::log_info;

/// Client for the public latest-rates endpoint (USD base).
#[derive(Debug, Clone)]
pub struct ExchangeRateClient {
    url: String,
}

impl ExchangeRateClient {
    pub fn new(config: &AppConfig) -> Self {
        Self { url: config.exchange_rates_url.clone() }
    }
}

impl ExchangeRateRepository for ExchangeRateClient {
    async fn latest_rates(&self) -> FetchResult<RateTable> {
        let response: ExchangeRatesResponse = get_json(&self.url, &[]).await?;
        let as_of = response.date.clone().unwrap_or_default();
        let table = response.into_rate_table()?;

        log_info!(
            LogComponent::Infrastructure("ExchangeRates"),
            "💱 Loaded {} rates (as of {})",
            table.len(),
            as_of
        );

        Ok(table)
    }
}
