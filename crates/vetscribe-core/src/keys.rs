//! S3 key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of objects in the VetScribe S3 bucket.

use uuid::Uuid;

pub fn exam(id: Uuid) -> String {
    format!("exams/{id}.json")
}

pub fn soap(id: Uuid) -> String {
    format!("soap/{id}.json")
}

pub fn mri(id: Uuid) -> String {
    format!("mri/{id}.json")
}

pub fn patient(id: Uuid) -> String {
    format!("patients/{id}.json")
}

pub fn appointment(id: Uuid) -> String {
    format!("appointments/{id}.json")
}

pub fn residency_entry(id: Uuid) -> String {
    format!("residency/{id}.json")
}

pub const EXAMS_PREFIX: &str = "exams/";
pub const SOAP_PREFIX: &str = "soap/";
pub const MRI_PREFIX: &str = "mri/";
pub const PATIENTS_PREFIX: &str = "patients/";
pub const APPOINTMENTS_PREFIX: &str = "appointments/";
pub const RESIDENCY_PREFIX: &str = "residency/";
