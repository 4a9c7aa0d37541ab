use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use vetscribe_audit::events::AuditEvent;
use vetscribe_core::keys;
use vetscribe_core::models::mri::MriRecord;
use vetscribe_narrative::merge;
use vetscribe_storage::records;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn create_mri(
    State(state): State<AppState>,
    Json(record): Json<MriRecord>,
) -> Result<Json<MriRecord>, ApiError> {
    let key = keys::mri(record.id);
    records::save_record(&state.s3, &state.bucket, &key, &record).await?;

    AuditEvent::new("create", "mri", record.id.to_string()).emit();

    Ok(Json(record))
}

pub async fn get_mri(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MriRecord>, ApiError> {
    let key = keys::mri(id);
    let record: MriRecord = records::load_record(&state.s3, &state.bucket, &key).await?;
    Ok(Json(record))
}

pub async fn update_mri(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut record): Json<MriRecord>,
) -> Result<Json<MriRecord>, ApiError> {
    record.id = id;
    record.updated_at = jiff::Timestamp::now();
    let key = keys::mri(id);
    records::save_record(&state.s3, &state.bucket, &key, &record).await?;

    AuditEvent::new("save", "mri", id.to_string()).emit();

    Ok(Json(record))
}

pub async fn apply_preset(
    State(state): State<AppState>,
    Path((id, preset)): Path<(Uuid, String)>,
) -> Result<Json<MriRecord>, ApiError> {
    let key = keys::mri(id);
    let record: MriRecord = records::load_record(&state.s3, &state.bucket, &key).await?;

    let mut merged = merge::apply_mri_preset(&record, &preset);
    merged.updated_at = jiff::Timestamp::now();
    records::save_record(&state.s3, &state.bucket, &key, &merged).await?;

    AuditEvent::new("apply_preset", "mri", id.to_string())
        .with_details(serde_json::json!({ "preset": preset }))
        .emit();

    Ok(Json(merged))
}

/// Render the full report: composed clauses plus consistency advisories,
/// assembled into the copy-ready document.
pub async fn narrative(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<String, ApiError> {
    let key = keys::mri(id);
    let record: MriRecord = records::load_record(&state.s3, &state.bucket, &key).await?;
    Ok(vetscribe_narrative::render_mri(&record))
}
