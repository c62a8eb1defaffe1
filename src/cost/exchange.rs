//! Live USD exchange-rate lookup with a silent fallback to 1.0. A failed
//! lookup must never fail an estimate.

use serde::Deserialize;
use std::collections::HashMap;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
}

/// Fetch the USD -> `currency` rate from the configured exchange API.
/// Returns 1.0 for USD without a request, and 1.0 on any failure
/// (network, non-2xx, malformed body, unknown currency).
pub async fn fetch_rate(client: &reqwest::Client, api_base: &str, currency: &str) -> f64 {
    if currency.eq_ignore_ascii_case("USD") {
        return 1.0;
    }

    let url = format!("{}/v4/latest/USD", api_base.trim_end_matches('/'));
    let result = async {
        let resp = client.get(&url).send().await?.error_for_status()?;
        resp.json::<RatesResponse>().await
    }
    .await;

    match result {
        Ok(body) => match body.rates.get(&currency.to_uppercase()) {
            Some(rate) => *rate,
            None => {
                warn!(currency, "Exchange API returned no rate, using 1.0");
                1.0
            }
        },
        Err(e) => {
            warn!(error = %e, currency, "Exchange rate lookup failed, using 1.0");
            1.0
        }
    }
}
