pub mod appointments;
pub mod catalogs;
pub mod conditions;
pub mod exams;
pub mod health;
pub mod mri;
pub mod patients;
pub mod presets;
pub mod residency;
pub mod soap;
