use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
    session::SessionPhase,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionStateResponse {
    pub phase: SessionPhase,
}

#[utoipa::path(
    get,
    path = "/state",
    tag = "analysis",
    summary = "Current session phase",
    description = "Drives the page's busy indicator; anything but `idle` means an analysis is in flight",
    responses(
        (status = 200, body = SessionStateResponse)
    ),
)]
pub async fn get_session_state(
    State(state): State<AppState>,
) -> Result<Response<SessionStateResponse>, ApiError> {
    Ok(Response::OK(SessionStateResponse {
        phase: state.session.current(),
    }))
}
