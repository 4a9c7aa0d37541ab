use std::env;

use axum::middleware as axum_mw;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bucket = env::var("VETSCRIBE_BUCKET").unwrap_or_else(|_| "vetscribe".to_string());
    let model_id = env::var("VETSCRIBE_MODEL_ID")
        .unwrap_or_else(|_| "us.anthropic.claude-sonnet-4-20250514-v1:0".to_string());
    let port: u16 = env::var("VETSCRIBE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let sdk_config = vetscribe_storage::client::load_config().await;
    let s3 = vetscribe_storage::client::build_client(&sdk_config);

    let state = AppState {
        s3,
        sdk_config,
        bucket,
        model_id,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        // Catalogs (static clinical vocabulary, no state)
        .route("/catalogs/exam", get(routes::catalogs::exam_catalog))
        .route("/catalogs/soap", get(routes::catalogs::soap_catalog))
        .route("/catalogs/stroke", get(routes::catalogs::stroke_catalog))
        .route("/conditions", get(routes::conditions::list_conditions))
        .route("/conditions/{id}", get(routes::conditions::get_condition))
        .route("/presets/{domain}", get(routes::presets::list_presets))
        // Neurologic exam records
        .route("/exams", post(routes::exams::create_exam))
        .route("/exams/{id}", get(routes::exams::get_exam))
        .route("/exams/{id}", put(routes::exams::update_exam))
        .route(
            "/exams/{id}/apply/{preset}",
            post(routes::exams::apply_preset),
        )
        .route("/exams/{id}/narrative", post(routes::exams::narrative))
        .route("/exams/{id}/dictation", post(routes::exams::dictation))
        // SOAP note records
        .route("/soap", post(routes::soap::create_soap))
        .route("/soap/{id}", get(routes::soap::get_soap))
        .route("/soap/{id}", put(routes::soap::update_soap))
        .route("/soap/{id}/apply/{preset}", post(routes::soap::apply_preset))
        .route("/soap/{id}/narrative", post(routes::soap::narrative))
        // MRI report records
        .route("/mri", post(routes::mri::create_mri))
        .route("/mri/{id}", get(routes::mri::get_mri))
        .route("/mri/{id}", put(routes::mri::update_mri))
        .route("/mri/{id}/apply/{preset}", post(routes::mri::apply_preset))
        .route("/mri/{id}/narrative", post(routes::mri::narrative))
        // Clinic records
        .route("/patients", get(routes::patients::list_patients))
        .route("/patients", post(routes::patients::create_patient))
        .route("/patients/{id}", get(routes::patients::get_patient))
        .route("/patients/{id}", put(routes::patients::update_patient))
        .route("/patients/{id}", delete(routes::patients::delete_patient))
        .route(
            "/appointments",
            get(routes::appointments::list_appointments),
        )
        .route(
            "/appointments",
            post(routes::appointments::create_appointment),
        )
        .route(
            "/appointments/{id}",
            get(routes::appointments::get_appointment),
        )
        .route(
            "/appointments/{id}",
            put(routes::appointments::update_appointment),
        )
        .route(
            "/appointments/{id}",
            delete(routes::appointments::delete_appointment),
        )
        // Residency hour log
        .route("/residency", get(routes::residency::list_entries))
        .route("/residency", post(routes::residency::create_entry))
        .route("/residency/tally", get(routes::residency::tally))
        .route("/residency/{id}", get(routes::residency::get_entry))
        .route("/residency/{id}", put(routes::residency::update_entry))
        .route("/residency/{id}", delete(routes::residency::delete_entry))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
