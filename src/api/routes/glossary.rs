use axum::extract::Query;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::glossary;

#[derive(Deserialize)]
pub struct GlossaryQuery {
    pub q: Option<String>,
}

/// GET /api/glossary?q=term: case-insensitive search over the glossary.
pub async fn search_glossary(Query(query): Query<GlossaryQuery>) -> Json<Value> {
    let terms = glossary::search(query.q.as_deref().unwrap_or(""));
    Json(json!({ "terms": terms, "total": terms.len() }))
}
