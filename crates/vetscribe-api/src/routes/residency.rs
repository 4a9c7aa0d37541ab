use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use vetscribe_audit::events::AuditEvent;
use vetscribe_core::keys;
use vetscribe_core::models::residency::{self, CategoryHours, ResidencyEntry};
use vetscribe_storage::{objects, records};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_entries(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResidencyEntry>>, ApiError> {
    Ok(Json(load_entries(&state).await?))
}

pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResidencyEntry>, ApiError> {
    let key = keys::residency_entry(id);
    let entry: ResidencyEntry = records::load_record(&state.s3, &state.bucket, &key).await?;
    Ok(Json(entry))
}

pub async fn create_entry(
    State(state): State<AppState>,
    Json(entry): Json<ResidencyEntry>,
) -> Result<Json<ResidencyEntry>, ApiError> {
    let key = keys::residency_entry(entry.id);
    records::save_record(&state.s3, &state.bucket, &key, &entry).await?;

    AuditEvent::new("create", "residency_entry", entry.id.to_string()).emit();

    Ok(Json(entry))
}

pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut entry): Json<ResidencyEntry>,
) -> Result<Json<ResidencyEntry>, ApiError> {
    entry.id = id;
    entry.updated_at = jiff::Timestamp::now();
    let key = keys::residency_entry(id);
    records::save_record(&state.s3, &state.bucket, &key, &entry).await?;

    AuditEvent::new("save", "residency_entry", id.to_string()).emit();

    Ok(Json(entry))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, ApiError> {
    let key = keys::residency_entry(id);
    objects::delete_object(&state.s3, &state.bucket, &key).await?;

    AuditEvent::new("delete", "residency_entry", id.to_string()).emit();

    Ok(Json(()))
}

#[derive(Serialize)]
pub struct TallyResponse {
    pub total: f64,
    pub by_category: Vec<CategoryHours>,
}

/// Summed hours across all logged entries, overall and per category.
/// Malformed hour strings count as zero rather than failing the tally.
pub async fn tally(State(state): State<AppState>) -> Result<Json<TallyResponse>, ApiError> {
    let entries = load_entries(&state).await?;

    Ok(Json(TallyResponse {
        total: residency::tally_hours(&entries),
        by_category: residency::tally_by_category(&entries),
    }))
}

async fn load_entries(state: &AppState) -> Result<Vec<ResidencyEntry>, ApiError> {
    let keys = objects::list_objects(&state.s3, &state.bucket, keys::RESIDENCY_PREFIX).await?;

    let mut entries = Vec::new();
    for key in &keys {
        let entry: ResidencyEntry = records::load_record(&state.s3, &state.bucket, key).await?;
        entries.push(entry);
    }

    Ok(entries)
}
