use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use vetscribe_audit::events::AuditEvent;
use vetscribe_core::keys;
use vetscribe_core::models::appointment::Appointment;
use vetscribe_storage::{objects, records};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_appointments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    let keys = objects::list_objects(&state.s3, &state.bucket, keys::APPOINTMENTS_PREFIX).await?;

    let mut appointments = Vec::new();
    for key in &keys {
        let appointment: Appointment = records::load_record(&state.s3, &state.bucket, key).await?;
        appointments.push(appointment);
    }

    Ok(Json(appointments))
}

pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Appointment>, ApiError> {
    let key = keys::appointment(id);
    let appointment: Appointment = records::load_record(&state.s3, &state.bucket, &key).await?;
    Ok(Json(appointment))
}

pub async fn create_appointment(
    State(state): State<AppState>,
    Json(appointment): Json<Appointment>,
) -> Result<Json<Appointment>, ApiError> {
    let key = keys::appointment(appointment.id);
    records::save_record(&state.s3, &state.bucket, &key, &appointment).await?;

    AuditEvent::new("create", "appointment", appointment.id.to_string()).emit();

    Ok(Json(appointment))
}

pub async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut appointment): Json<Appointment>,
) -> Result<Json<Appointment>, ApiError> {
    appointment.id = id;
    appointment.updated_at = jiff::Timestamp::now();
    let key = keys::appointment(id);
    records::save_record(&state.s3, &state.bucket, &key, &appointment).await?;

    AuditEvent::new("save", "appointment", id.to_string()).emit();

    Ok(Json(appointment))
}

pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, ApiError> {
    let key = keys::appointment(id);
    objects::delete_object(&state.s3, &state.bucket, &key).await?;

    AuditEvent::new("delete", "appointment", id.to_string()).emit();

    Ok(Json(()))
}
