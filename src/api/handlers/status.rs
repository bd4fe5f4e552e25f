// src/api/handlers/status.rs
use actix_web::{web, HttpResponse, Result};
use serde::Serialize;
use crate::api::AppState;
use crate::display::StatusSnapshot;
use crate::endpoint::Endpoint;

#[derive(Serialize)]
pub struct StatusResponse {
    #[serde(flatten)]
    pub status: StatusSnapshot,
    pub endpoint: Endpoint,
}

pub async fn get_status(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(StatusResponse {
        status: state.board.snapshot(),
        endpoint: state.endpoint.clone(),
    }))
}

/// Fires a new call; the board changes when its outcome arrives.
pub async fn refresh(state: web::Data<AppState>) -> Result<HttpResponse> {
    state.refresh();
    Ok(HttpResponse::Accepted().json(serde_json::json!({
        "status": "requested",
        "revision": state.board.snapshot().revision
    })))
}
