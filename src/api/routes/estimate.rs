use axum::{extract::State, Json};

use crate::api::models::EstimateRequest;
use crate::api::AppState;
use crate::cost::{self, exchange};
use crate::errors::A11yError;

/// POST /api/cost-estimate: pure arithmetic over the submitted form values,
/// plus one optional exchange-rate lookup that silently falls back to 1.0.
pub async fn cost_estimate(
    State(state): State<AppState>,
    Json(req): Json<EstimateRequest>,
) -> Result<Json<cost::CostEstimate>, A11yError> {
    let currency = req.currency.as_deref().unwrap_or("USD").to_uppercase();
    let rate = exchange::fetch_rate(
        &state.client,
        &state.config.cost.exchange_api_base,
        &currency,
    )
    .await;

    Ok(Json(cost::estimate(&req.inputs, &currency, rate)))
}
