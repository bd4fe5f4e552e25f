// src/api/state.rs
use crate::config::AppConfig;
use crate::display::{StatusBoard, StatusDisplay};
use crate::endpoint::Endpoint;
use crate::rpc::{dispatch, GlibControlService};
use std::sync::Arc;
use tokio::task::JoinHandle;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub endpoint: Endpoint,
    pub service: Arc<dyn GlibControlService>,
    pub board: StatusBoard,
}

impl AppState {
    pub fn new(config: AppConfig, endpoint: Endpoint, service: Arc<dyn GlibControlService>) -> Self {
        Self {
            config: Arc::new(config),
            endpoint,
            service,
            board: StatusBoard::new(),
        }
    }

    /// Ask the proxy for the connected CBCs and post the outcome to the board,
    /// unless a later refresh has already been shown.
    pub fn refresh(&self) -> JoinHandle<()> {
        let board = self.board.clone();
        let call = board.begin_call();
        dispatch(self.service.clone(), Vec::new(), move |outcome| {
            board.set_text(call, outcome.status_text());
        })
    }
}
