use crate::domain::market_data::{BASE_CURRENCY, DailyBar, ExampleCompany, RateTable};
use leptos::*;

/// Reactive state behind the lookup page. Only the page and its use cases write to it.
#[derive(Clone, Copy)]
pub struct UiState {
    pub company_name: RwSignal<String>,
    pub stock_data: RwSignal<Vec<DailyBar>>,
    pub currency_rates: RwSignal<RateTable>,
    pub selected_currency: RwSignal<String>,
    pub loading: RwSignal<bool>,
}

impl UiState {
    pub fn new(default_currency: &str) -> Self {
        Self {
            company_name: create_rw_signal(String::new()),
            stock_data: create_rw_signal(Vec::new()),
            currency_rates: create_rw_signal(RateTable::new()),
            selected_currency: create_rw_signal(default_currency.to_string()),
            loading: create_rw_signal(false),
        }
    }

    /// "Get Data" is enabled only with a non-empty name and no lookup in flight.
    pub fn can_submit(&self) -> bool {
        !self.loading.get() && self.company_name.with(|name| !name.is_empty())
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading.get() { "Loading..." } else { "Get Data" }
    }

    pub fn set_company_name(&self, name: String) {
        self.company_name.set(name);
    }

    /// Shortcut buttons only overwrite the input; the lookup waits for "Get Data".
    pub fn select_example(&self, company: ExampleCompany) {
        self.company_name.set(company.name().to_string());
    }

    pub fn select_currency(&self, code: String) {
        self.selected_currency.set(code);
    }

    pub fn currency_codes(&self) -> Vec<String> {
        self.currency_rates.with(|rates| rates.codes().map(str::to_string).collect())
    }

    pub fn conversion_rate(&self) -> Option<f64> {
        let code = self.selected_currency.get();
        self.currency_rates.with(|rates| rates.get(&code))
    }

    /// `1 USD equals <rate> <code>`; the rate is left blank for a code the table lacks.
    pub fn conversion_line(&self) -> String {
        let code = self.selected_currency.get();
        self.currency_rates.with(|rates| {
            rates
                .conversion_line(&code)
                .unwrap_or_else(|| format!("1 {} equals  {}", BASE_CURRENCY, code))
        })
    }
}

/// Holds `loading` high for as long as it lives.
#[must_use = "loading drops back to false as soon as the guard is dropped"]
pub struct LoadingGuard {
    loading: RwSignal<bool>,
}

impl LoadingGuard {
    pub fn engage(loading: RwSignal<bool>) -> Self {
        loading.set(true);
        Self { loading }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        // try_set: the page may already be unmounted when a slow request finishes
        let _ = self.loading.try_set(false);
    }
}
