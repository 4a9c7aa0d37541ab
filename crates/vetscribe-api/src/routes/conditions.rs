use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use vetscribe_catalogs::conditions::{self, ConditionEntry};

use crate::error::ApiError;

/// Listing row for the condition picker. The full template is fetched per
/// condition once one is selected.
#[derive(Serialize)]
pub struct ConditionSummary {
    pub id: &'static str,
    pub display_name: &'static str,
    pub variant_count: usize,
}

pub async fn list_conditions() -> Json<Vec<ConditionSummary>> {
    let summaries = conditions::all()
        .iter()
        .map(|c| ConditionSummary {
            id: c.id.as_str(),
            display_name: c.display_name.as_str(),
            variant_count: c.variants.len(),
        })
        .collect();

    Json(summaries)
}

pub async fn get_condition(
    Path(id): Path<String>,
) -> Result<Json<&'static ConditionEntry>, ApiError> {
    let entry = conditions::get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("unknown condition: {id}")))?;
    Ok(Json(entry))
}
