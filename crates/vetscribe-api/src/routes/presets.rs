use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use vetscribe_catalogs::presets;
use vetscribe_core::models::RecordDomain;

use crate::error::ApiError;

/// Listing row for the preset picker. Clients apply a preset by id through
/// the per-record apply endpoint; the patch itself never leaves the server.
#[derive(Serialize)]
pub struct PresetSummary {
    pub id: &'static str,
    pub label: &'static str,
}

pub async fn list_presets(
    Path(domain): Path<String>,
) -> Result<Json<Vec<PresetSummary>>, ApiError> {
    let domain: RecordDomain = domain.parse()?;

    let summaries = match domain {
        RecordDomain::Exam => presets::exam::all()
            .iter()
            .map(|p| PresetSummary {
                id: p.id.as_str(),
                label: p.label.as_str(),
            })
            .collect(),
        RecordDomain::Soap => presets::soap::all()
            .iter()
            .map(|p| PresetSummary {
                id: p.id.as_str(),
                label: p.label.as_str(),
            })
            .collect(),
        RecordDomain::Mri => presets::mri::all()
            .iter()
            .map(|p| PresetSummary {
                id: p.id.as_str(),
                label: p.label.as_str(),
            })
            .collect(),
    };

    Ok(Json(summaries))
}
