use axum::{Json, extract::State};
use std::sync::Arc;

use crate::metrics::INFO_REQUESTS;
use crate::models::{InfoRequest, InfoResponse};
use crate::state::AppState;

pub async fn info_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<InfoRequest>,
) -> Json<InfoResponse> {
    INFO_REQUESTS.inc();

    if req.url.is_empty() {
        return Json(InfoResponse::fail("URL is required"));
    }

    match state.fetcher.fetch_info(&req.url).await {
        Ok(raw) => Json(InfoResponse::from_raw(raw)),
        Err(e) => Json(InfoResponse::fail(e.user_message())),
    }
}
