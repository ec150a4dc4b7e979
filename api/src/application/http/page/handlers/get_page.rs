use axum::response::Html;

/// The single interactive page. Everything else it needs it fetches from the
/// JSON routes relative to its own URL, so the root path prefix keeps working.
pub async fn get_page() -> Html<&'static str> {
    Html(include_str!("../index.html"))
}
