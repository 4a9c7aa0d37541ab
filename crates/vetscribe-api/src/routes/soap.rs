use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use vetscribe_audit::events::AuditEvent;
use vetscribe_core::keys;
use vetscribe_core::models::soap::SoapRecord;
use vetscribe_narrative::merge;
use vetscribe_storage::records;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn create_soap(
    State(state): State<AppState>,
    Json(record): Json<SoapRecord>,
) -> Result<Json<SoapRecord>, ApiError> {
    let key = keys::soap(record.id);
    records::save_record(&state.s3, &state.bucket, &key, &record).await?;

    AuditEvent::new("create", "soap", record.id.to_string()).emit();

    Ok(Json(record))
}

pub async fn get_soap(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SoapRecord>, ApiError> {
    let key = keys::soap(id);
    let record: SoapRecord = records::load_record(&state.s3, &state.bucket, &key).await?;
    Ok(Json(record))
}

pub async fn update_soap(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut record): Json<SoapRecord>,
) -> Result<Json<SoapRecord>, ApiError> {
    record.id = id;
    record.updated_at = jiff::Timestamp::now();
    let key = keys::soap(id);
    records::save_record(&state.s3, &state.bucket, &key, &record).await?;

    AuditEvent::new("save", "soap", id.to_string()).emit();

    Ok(Json(record))
}

pub async fn apply_preset(
    State(state): State<AppState>,
    Path((id, preset)): Path<(Uuid, String)>,
) -> Result<Json<SoapRecord>, ApiError> {
    let key = keys::soap(id);
    let record: SoapRecord = records::load_record(&state.s3, &state.bucket, &key).await?;

    let mut merged = merge::apply_soap_preset(&record, &preset);
    merged.updated_at = jiff::Timestamp::now();
    records::save_record(&state.s3, &state.bucket, &key, &merged).await?;

    AuditEvent::new("apply_preset", "soap", id.to_string())
        .with_details(serde_json::json!({ "preset": preset }))
        .emit();

    Ok(Json(merged))
}

pub async fn narrative(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<String, ApiError> {
    let key = keys::soap(id);
    let record: SoapRecord = records::load_record(&state.s3, &state.bucket, &key).await?;
    Ok(vetscribe_narrative::render_soap(&record))
}
