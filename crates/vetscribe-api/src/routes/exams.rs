use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use vetscribe_audit::events::AuditEvent;
use vetscribe_core::keys;
use vetscribe_core::models::exam::ExamRecord;
use vetscribe_narrative::merge;
use vetscribe_storage::records;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn create_exam(
    State(state): State<AppState>,
    Json(record): Json<ExamRecord>,
) -> Result<Json<ExamRecord>, ApiError> {
    let key = keys::exam(record.id);
    records::save_record(&state.s3, &state.bucket, &key, &record).await?;

    AuditEvent::new("create", "exam", record.id.to_string()).emit();

    Ok(Json(record))
}

pub async fn get_exam(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ExamRecord>, ApiError> {
    let key = keys::exam(id);
    let record: ExamRecord = records::load_record(&state.s3, &state.bucket, &key).await?;
    Ok(Json(record))
}

pub async fn update_exam(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut record): Json<ExamRecord>,
) -> Result<Json<ExamRecord>, ApiError> {
    record.id = id;
    record.updated_at = jiff::Timestamp::now();
    let key = keys::exam(id);
    records::save_record(&state.s3, &state.bucket, &key, &record).await?;

    AuditEvent::new("save", "exam", id.to_string()).emit();

    Ok(Json(record))
}

/// Merge a preset into the stored record and save the result. An unknown
/// preset id merges as a no-op, matching the engine's totality contract.
pub async fn apply_preset(
    State(state): State<AppState>,
    Path((id, preset)): Path<(Uuid, String)>,
) -> Result<Json<ExamRecord>, ApiError> {
    let key = keys::exam(id);
    let record: ExamRecord = records::load_record(&state.s3, &state.bucket, &key).await?;

    let mut merged = merge::apply_exam_preset(&record, &preset);
    merged.updated_at = jiff::Timestamp::now();
    records::save_record(&state.s3, &state.bucket, &key, &merged).await?;

    AuditEvent::new("apply_preset", "exam", id.to_string())
        .with_details(serde_json::json!({ "preset": preset }))
        .emit();

    Ok(Json(merged))
}

pub async fn narrative(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<String, ApiError> {
    let key = keys::exam(id);
    let record: ExamRecord = records::load_record(&state.s3, &state.bucket, &key).await?;
    Ok(vetscribe_narrative::render_exam(&record))
}

#[derive(Deserialize)]
pub struct DictationRequest {
    pub text: String,
}

/// Parse dictated findings via Bedrock and merge the resulting patch
/// through the same path a preset takes.
pub async fn dictation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<DictationRequest>,
) -> Result<Json<ExamRecord>, ApiError> {
    let key = keys::exam(id);
    let record: ExamRecord = records::load_record(&state.s3, &state.bucket, &key).await?;

    let patch = vetscribe_bedrock::dictation::parse_exam_dictation(
        &state.sdk_config,
        &state.model_id,
        &req.text,
    )
    .await?;

    let mut merged = merge::apply_exam_patch(&record, &patch);
    merged.updated_at = jiff::Timestamp::now();
    records::save_record(&state.s3, &state.bucket, &key, &merged).await?;

    AuditEvent::new("dictation", "exam", id.to_string())
        .with_details(serde_json::json!({ "sections": patch.sections.len() }))
        .emit();

    Ok(Json(merged))
}
