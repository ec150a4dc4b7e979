use crate::application::http::{
    analysis::router::AnalysisApiDoc,
    health::handlers::get_health::__path_get_health,
    server::config::__path_get_config,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Platelens API"
    ),
    paths(get_config, get_health),
    nest(
        (path = "/analysis", api = AnalysisApiDoc),
    )
)]
pub struct ApiDoc;
