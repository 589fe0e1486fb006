#![cfg(target_arch = "wasm32")]

use leptos::*;
use stock_lookup_wasm::app::{CurrencyConverter, ExampleCompanies, PriceTable};
use stock_lookup_wasm::domain::market_data::{DailyBar, RateTable};
use stock_lookup_wasm::ui_state::UiState;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> web_sys::HtmlElement {
    let element = gloo::utils::document()
        .create_element("div")
        .unwrap()
        .unchecked_into::<web_sys::HtmlElement>();
    gloo::utils::body().append_child(&element).unwrap();
    element
}

fn text_of(root: &web_sys::HtmlElement, selector: &str) -> String {
    root.query_selector(selector).unwrap().unwrap().text_content().unwrap()
}

#[wasm_bindgen_test]
fn price_table_renders_one_row_per_bar() {
    let bars = vec![
        DailyBar::new("2024-01-05".into(), 100.5, 101.0, 99.0, 100.0, 123456.0),
        DailyBar::new("2024-01-04".into(), f64::NAN, 102.0, 98.5, 101.25, 99000.0),
        DailyBar::new("2024-01-03".into(), 97.0, 99.0, 96.0, 98.0, 87000.0),
    ];
    let root = container();
    mount_to(root.clone(), move || view! { <PriceTable bars=Signal::derive(move || bars.clone()) /> });

    assert_eq!(root.query_selector_all("tbody tr").unwrap().length(), 3);
    assert_eq!(text_of(&root, "tbody tr:nth-child(1) td:nth-child(1)"), "2024-01-05");
    assert_eq!(text_of(&root, "tbody tr:nth-child(1) td:nth-child(2)"), "100.5");
    assert_eq!(text_of(&root, "tbody tr:nth-child(1) td:nth-child(3)"), "101");
    assert_eq!(text_of(&root, "tbody tr:nth-child(1) td:nth-child(6)"), "123456");
    assert_eq!(text_of(&root, "tbody tr:nth-child(2) td:nth-child(2)"), "NaN");
}

#[wasm_bindgen_test]
fn currency_selector_lists_every_code() {
    let rates: RateTable = [("USD", 1.0), ("EUR", 0.92), ("INR", 83.1)]
        .into_iter()
        .map(|(code, rate)| (code.to_string(), rate))
        .collect();
    let root = container();
    mount_to(root.clone(), move || {
        let state = UiState::new("EUR");
        state.currency_rates.set(rates);
        provide_context(state);
        view! { <CurrencyConverter /> }
    });

    assert_eq!(root.query_selector_all("option").unwrap().length(), 3);
    assert_eq!(text_of(&root, ".conversion-line"), "1 USD equals 0.92 EUR");
}

#[wasm_bindgen_test]
fn example_buttons_cover_all_shortcuts() {
    let root = container();
    mount_to(root.clone(), || {
        provide_context(UiState::new("USD"));
        view! { <ExampleCompanies /> }
    });

    let buttons = root.query_selector_all(".example-btn").unwrap();
    assert_eq!(buttons.length(), 5);
    assert_eq!(text_of(&root, ".example-btn"), "Apple Inc.");
}
