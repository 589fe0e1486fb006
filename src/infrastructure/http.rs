pub mod alpha_vantage_client;
pub mod dto;
pub mod exchange_rate_client;

pub use alpha_vantage_client::{AlphaVantageClient, AlphaVantageQuery};
pub use exchange_rate_client::ExchangeRateClient;

use crate::domain::errors::{FetchError, FetchResult};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_error, log_trace};
use gloo::net::http::Request;
use serde::de::DeserializeOwned;

/// GET `url` with URL-encoded query parameters and decode the JSON body.
///
/// No timeout and no retry: a stalled upstream stalls the caller.
pub async fn get_json<T>(url: &str, params: &[(&str, &str)]) -> FetchResult<T>
where
    T: DeserializeOwned,
{
    log_debug!(LogComponent::Infrastructure("HTTP"), "🌐 GET JSON: {}", url);

    let response = Request::get(url)
        .query(params.iter().copied())
        .send()
        .await
        .map_err(|e| FetchError::Network(format!("Request failed: {e}")))?;

    if !response.ok() {
        let err = FetchError::HttpStatus {
            status: response.status(),
            status_text: response.status_text(),
        };
        log_error!(LogComponent::Infrastructure("HTTP"), "{}", err);
        return Err(err);
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(format!("Failed to read response: {e}")))?;

    log_debug!(LogComponent::Infrastructure("HTTP"), "✅ GET response: {} bytes", body.len());
    log_trace!(LogComponent::Infrastructure("HTTP"), "Response body: {}", body);

    decode_json(&body)
}

/// Decode a response body, mapping serde failures into the fetch error taxonomy.
pub fn decode_json<T>(body: &str) -> FetchResult<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body)
        .map_err(|e| FetchError::MalformedResponse(format!("Failed to parse JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn non_json_body_is_malformed() {
        let err = decode_json::<Value>("<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse(_)));
    }

    #[test]
    fn json_body_decodes() {
        let value: Value = decode_json(r#"{"rates":{"USD":1}}"#).unwrap();
        assert_eq!(value["rates"]["USD"], 1);
    }
}
