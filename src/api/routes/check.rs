use axum::{extract::State, Json};

use crate::api::models::CheckRequest;
use crate::api::AppState;
use crate::errors::A11yError;
use crate::models::ScanReport;

/// POST /api/accessibility-check: scan one URL with the configured provider.
/// Bad input maps to 400, upstream fetch/browser failures to 500; a failed
/// scan returns no partial results.
pub async fn accessibility_check(
    State(state): State<AppState>,
    Json(req): Json<CheckRequest>,
) -> Result<Json<ScanReport>, A11yError> {
    let url = req
        .url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| A11yError::InvalidTarget("URL is required".into()))?;

    let report = state.provider.scan(url).await?;
    Ok(Json(report))
}
