//! Patient handlers
//!
//! - POST /api/patient/search
//! - GET  /api/patient/{id}/info
//! - GET  /api/patient/{id}/attachments
//! - GET  /api/patient/{id}/attachments/{module}
//! - GET  /api/modules

use crate::{
    db::SearchCriteria,
    models::{EmrAttachment, PatientInformation, PatientSearchResult},
    services::ModuleSummary,
    state::AppState,
    Result,
};
use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};

/// Search patients by a JSON object of criteria.
///
/// The body is parsed by hand so malformed JSON surfaces as an invalid request
/// rather than an extractor rejection.
pub async fn search_patients(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<PatientSearchResult>>> {
    let criteria = SearchCriteria::from_slice(&body)?;
    let results = state.patient_service.search(&criteria).await?;
    Ok(Json(results))
}

pub async fn patient_information(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PatientInformation>> {
    let info = state.patient_service.information(&id).await?;
    Ok(Json(info))
}

pub async fn patient_attachments(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<EmrAttachment>>> {
    let attachments = state.patient_service.attachments(&id, None).await?;
    Ok(Json(attachments))
}

pub async fn patient_module_attachments(
    State(state): State<AppState>,
    Path((id, module)): Path<(String, String)>,
) -> Result<Json<Vec<EmrAttachment>>> {
    let attachments = state
        .patient_service
        .attachments(&id, Some(&module))
        .await?;
    Ok(Json(attachments))
}

pub async fn list_modules(State(state): State<AppState>) -> Json<Vec<ModuleSummary>> {
    Json(state.patient_service.modules())
}
