//! Patient API routes

use crate::api::handlers::patient;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn patient_routes() -> Router<AppState> {
    Router::new()
        .route("/patient/search", post(patient::search_patients))
        .route("/patient/:id/info", get(patient::patient_information))
        .route("/patient/:id/attachments", get(patient::patient_attachments))
        .route(
            "/patient/:id/attachments/:module",
            get(patient::patient_module_attachments),
        )
        .route("/modules", get(patient::list_modules))
}
