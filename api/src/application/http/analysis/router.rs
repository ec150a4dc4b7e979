use super::handlers::{
    analyze_image::{__path_analyze_image, analyze_image},
    get_session_state::{__path_get_session_state, get_session_state},
};
use super::validators::MAX_IMAGE_BYTES;
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_image, get_session_state))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/analysis/image", state.args.server.root_path),
            post(analyze_image),
        )
        .route(
            &format!("{}/analysis/state", state.args.server.root_path),
            get(get_session_state),
        )
        // Room for the multipart envelope around the image itself.
        .layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES + 1024 * 1024))
}
