use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use vetscribe_audit::events::AuditEvent;
use vetscribe_core::keys;
use vetscribe_core::models::patient::Patient;
use vetscribe_storage::{objects, records};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_patients(
    State(state): State<AppState>,
) -> Result<Json<Vec<Patient>>, ApiError> {
    let keys = objects::list_objects(&state.s3, &state.bucket, keys::PATIENTS_PREFIX).await?;

    let mut patients = Vec::new();
    for key in &keys {
        let patient: Patient = records::load_record(&state.s3, &state.bucket, key).await?;
        patients.push(patient);
    }

    Ok(Json(patients))
}

pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Patient>, ApiError> {
    let key = keys::patient(id);
    let patient: Patient = records::load_record(&state.s3, &state.bucket, &key).await?;
    Ok(Json(patient))
}

pub async fn create_patient(
    State(state): State<AppState>,
    Json(patient): Json<Patient>,
) -> Result<Json<Patient>, ApiError> {
    let key = keys::patient(patient.id);
    records::save_record(&state.s3, &state.bucket, &key, &patient).await?;

    AuditEvent::new("create", "patient", patient.id.to_string()).emit();

    Ok(Json(patient))
}

pub async fn update_patient(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut patient): Json<Patient>,
) -> Result<Json<Patient>, ApiError> {
    patient.id = id;
    patient.updated_at = jiff::Timestamp::now();
    let key = keys::patient(id);
    records::save_record(&state.s3, &state.bucket, &key, &patient).await?;

    AuditEvent::new("save", "patient", id.to_string()).emit();

    Ok(Json(patient))
}

pub async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, ApiError> {
    let key = keys::patient(id);
    objects::delete_object(&state.s3, &state.bucket, &key).await?;

    AuditEvent::new("delete", "patient", id.to_string()).emit();

    Ok(Json(()))
}
