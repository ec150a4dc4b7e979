use axum::extract::{Multipart, State};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::application::http::{
    analysis::validators::{MAX_IMAGE_BYTES, extension_is_accepted},
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
        session::SessionPhase,
    },
};
use platelens_core::domain::{
    analysis::{entities::AnalysisReport, ports::AnalysisService},
    image_intake::{services as image_intake, value_objects::IntakeSubmission},
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeImageResponse {
    pub data: AnalysisReport,
}

#[utoipa::path(
    post,
    path = "/image",
    tag = "analysis",
    summary = "Analyze food from image",
    description = "Normalizes the submitted image and has the vision model describe its nutrition",
    responses(
        (status = 200, body = AnalyzeImageResponse)
    ),
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AnalyzeImageResponse>, ApiError> {
    let guard = state
        .session
        .begin()
        .ok_or_else(|| ApiError::Conflict("an analysis is already in progress".to_string()))?;

    let mut uploaded: Option<Vec<u8>> = None;
    let mut captured: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "upload" | "capture" => {
                if let Some(file_name) = field.file_name() {
                    if !extension_is_accepted(file_name) {
                        warn!("unexpected upload extension: {file_name}");
                    }
                }

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_BYTES {
                    return Err(ApiError::PayloadTooLarge(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_BYTES
                    )));
                }

                if name == "capture" {
                    captured = Some(data.to_vec());
                } else {
                    uploaded = Some(data.to_vec());
                }
            }
            _ => {}
        }
    }

    let submission = IntakeSubmission { uploaded, captured };
    let (bytes, source) = submission
        .select()
        .ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let decoded = image_intake::decode(&bytes).map_err(ApiError::from)?;

    guard.advance(SessionPhase::Encoding);
    let canonical = image_intake::to_canonical(decoded).map_err(ApiError::from)?;

    guard.advance(SessionPhase::CallingService);
    let report = state
        .service
        .analyze_image(canonical, source)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeImageResponse { data: report }))
}
