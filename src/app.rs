use leptos::*;
use strum::IntoEnumIterator;

use crate::{
    application::{FetchStockDataUseCase, LoadCurrencyRatesUseCase},
    config::config,
    domain::{
        logging::LogComponent,
        market_data::{DailyBar, ExampleCompany},
    },
    infrastructure::http::{AlphaVantageClient, ExchangeRateClient},
    log_info,
    ui_state::UiState,
};

const STYLES: &str = r#"
.stock-app {
    display: grid;
    place-items: center;
    min-height: 100vh;
    background-color: #86B8F3;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
}

.stock-app h1 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1rem; }
.stock-app h2 { font-size: 1.25rem; font-weight: 700; margin-bottom: 0.5rem; }
.hint { font-size: 0.875rem; font-style: italic; margin-bottom: 1rem; }

.lookup-form { display: flex; align-items: center; margin-bottom: 1rem; }
.lookup-form label { margin-right: 0.5rem; font-weight: 700; }
.lookup-form input { border: 1px solid #999; border-radius: 4px; padding: 4px 8px; margin-right: 0.5rem; }

.submit-btn {
    background: #3b82f6;
    color: white;
    font-weight: 700;
    padding: 4px 16px;
    border: none;
    border-radius: 4px;
    cursor: pointer;
}
.submit-btn:hover { background: #1d4ed8; }
.submit-btn:disabled { opacity: 0.6; cursor: default; }

.examples { display: grid; grid-template-columns: repeat(2, 1fr); gap: 0.5rem; margin-bottom: 1rem; }
.example-btn {
    background: #e5e7eb;
    color: #1f2937;
    font-weight: 600;
    padding: 4px 8px;
    border: none;
    border-radius: 4px;
    cursor: pointer;
}
.example-btn:hover { background: #d1d5db; }

.price-section { display: flex; flex-direction: column; align-items: center; margin-bottom: 2rem; }
.price-table td { padding: 1rem 1.5rem; }

.currency-section { margin-bottom: 1rem; }
.currency-section select { border: 1px solid #999; border-radius: 4px; padding: 4px 8px; margin-right: 0.5rem; }
"#;

/// 🦀 Stock price lookup page
#[component]
pub fn App() -> impl IntoView {
    let config = config();
    let state = UiState::new(&config.default_currency);
    provide_context(state);

    let alpha_vantage = AlphaVantageClient::new(config);
    let fetch_stock_data = FetchStockDataUseCase::new(alpha_vantage.clone(), alpha_vantage);
    let load_rates = LoadCurrencyRatesUseCase::new(ExchangeRateClient::new(config));

    // Rates are fetched exactly once, when the page mounts.
    wasm_bindgen_futures::spawn_local(async move {
        load_rates.execute(state).await;
    });

    let on_submit = Callback::new(move |_: ()| {
        log_info!(
            LogComponent::Presentation("LookupForm"),
            "Get Data for \"{}\"",
            state.company_name.get_untracked()
        );
        let use_case = fetch_stock_data.clone();
        spawn_local(async move {
            use_case.execute(state).await;
        });
    });

    view! {
        <style>{STYLES}</style>
        <div class="stock-app">
            <div>
                <h1>"Stock Price Checker"</h1>
                <p class="hint">
                    <em>"You can check the information of any company by putting their name"</em>
                </p>
                <LookupForm on_submit=on_submit />
                <ExampleCompanies />
                <Show when=move || state.stock_data.with(|rows| !rows.is_empty())>
                    <div class="price-section">
                        <h2>"Stock Data"</h2>
                        <PriceTable bars=state.stock_data />
                    </div>
                </Show>
                <Show when=move || state.currency_rates.with(|rates| !rates.is_empty())>
                    <CurrencyConverter />
                </Show>
            </div>
        </div>
    }
}

/// Company name input plus the "Get Data" trigger.
#[component]
pub fn LookupForm(#[prop(into)] on_submit: Callback<()>) -> impl IntoView {
    let state = expect_context::<UiState>();

    view! {
        <div class="lookup-form">
            <label for="company-name">"Enter Company Name:"</label>
            <input
                type="text"
                id="company-name"
                prop:value=move || state.company_name.get()
                on:input=move |ev| state.set_company_name(event_target_value(&ev))
            />
            <button
                class="submit-btn"
                disabled=move || !state.can_submit()
                on:click=move |_| on_submit.call(())
            >
                {move || state.submit_label()}
            </button>
        </div>
    }
}

#[component]
pub fn ExampleCompanies() -> impl IntoView {
    let state = expect_context::<UiState>();

    view! {
        <div class="examples">
            {ExampleCompany::iter()
                .map(move |company| {
                    view! {
                        <button class="example-btn" on:click=move |_| state.select_example(company)>
                            {company.name()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Daily bars, newest first as delivered. Numbers use their shortest exact form; NaN shows as "NaN".
#[component]
pub fn PriceTable(#[prop(into)] bars: Signal<Vec<DailyBar>>) -> impl IntoView {
    view! {
        <div style="overflow-x: auto; width: 100%;">
            <table class="price-table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Open"</th>
                        <th>"High"</th>
                        <th>"Low"</th>
                        <th>"Close"</th>
                        <th>"Volume"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        bars.get()
                            .into_iter()
                            .map(|bar| {
                                view! {
                                    <tr>
                                        <td>{bar.date}</td>
                                        <td>{bar.open.to_string()}</td>
                                        <td>{bar.high.to_string()}</td>
                                        <td>{bar.low.to_string()}</td>
                                        <td>{bar.close.to_string()}</td>
                                        <td>{bar.volume.to_string()}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

/// Selector over the loaded rate table and the matching conversion line.
#[component]
pub fn CurrencyConverter() -> impl IntoView {
    let state = expect_context::<UiState>();

    view! {
        <div class="currency-section">
            <h2>"Currency Conversion"</h2>
            <div style="display: flex; align-items: center;">
                <select
                    id="currency-select"
                    on:change=move |ev| state.select_currency(event_target_value(&ev))
                >
                    {move || {
                        let selected = state.selected_currency.get();
                        state
                            .currency_codes()
                            .into_iter()
                            .map(|code| {
                                let is_selected = code == selected;
                                view! {
                                    <option value=code.clone() selected=is_selected>
                                        {code}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
                <span class="conversion-line">{move || state.conversion_line()}</span>
            </div>
        </div>
    }
}
