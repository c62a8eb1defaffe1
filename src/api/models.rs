use serde::{Deserialize, Serialize};

use crate::cost::CostInputs;

#[derive(Deserialize)]
pub struct CheckRequest {
    pub url: Option<String>,
}

#[derive(Deserialize)]
pub struct EstimateRequest {
    #[serde(flatten)]
    pub inputs: CostInputs,
    pub currency: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
