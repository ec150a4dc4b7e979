use super::handlers::get_page::get_page;
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};

pub fn page_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/", state.args.server.root_path),
        get(get_page),
    )
}
