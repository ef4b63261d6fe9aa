use axum::response::Html;

// Fixed landing page, embedded so the binary deploys on its own
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
