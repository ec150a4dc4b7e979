use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::{
    analysis::validators::{ACCEPTED_EXTENSIONS, MAX_IMAGE_BYTES},
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

/// The configuration the page is allowed to see.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublicConfig {
    pub model: String,
    pub max_image_bytes: usize,
    pub accepted_extensions: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "server",
    summary = "Public configuration",
    responses(
        (status = 200, body = PublicConfig)
    ),
)]
pub async fn get_config(State(state): State<AppState>) -> Result<Response<PublicConfig>, ApiError> {
    Ok(Response::OK(PublicConfig {
        model: state.args.llm.gemini_model.clone(),
        max_image_bytes: MAX_IMAGE_BYTES,
        accepted_extensions: ACCEPTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
    }))
}
