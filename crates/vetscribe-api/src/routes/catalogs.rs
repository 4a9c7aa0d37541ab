use axum::Json;
use serde::Serialize;

use vetscribe_catalogs::defs::SelectDef;
use vetscribe_catalogs::exam::{SectionDef, SummaryEntry};
use vetscribe_catalogs::soap::SystemDef;
use vetscribe_catalogs::{exam, soap, stroke};

/// Everything a client needs to drive the exam grid: section definitions
/// in documentation order plus the fixed summary layout.
#[derive(Serialize)]
pub struct ExamCatalog {
    pub sections: &'static [SectionDef],
    pub summary_layout: &'static [SummaryEntry],
}

pub async fn exam_catalog() -> Json<ExamCatalog> {
    Json(ExamCatalog {
        sections: exam::sections(),
        summary_layout: exam::summary_layout(),
    })
}

#[derive(Serialize)]
pub struct SoapCatalog {
    pub systems: &'static [SystemDef],
    pub attitude_options: &'static [&'static str],
    pub appetite_options: &'static [&'static str],
    pub hydration_options: &'static [&'static str],
    pub system_normal_phrase: &'static str,
}

pub async fn soap_catalog() -> Json<SoapCatalog> {
    Json(SoapCatalog {
        systems: soap::systems(),
        attitude_options: &soap::ATTITUDE_OPTIONS,
        appetite_options: &soap::APPETITE_OPTIONS,
        hydration_options: &soap::HYDRATION_OPTIONS,
        system_normal_phrase: soap::SYSTEM_NORMAL_PHRASE,
    })
}

#[derive(Serialize)]
pub struct StrokeCatalog {
    pub fields: &'static [SelectDef],
}

pub async fn stroke_catalog() -> Json<StrokeCatalog> {
    Json(StrokeCatalog {
        fields: stroke::fields(),
    })
}
