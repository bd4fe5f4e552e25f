// src/display.rs
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::outcome::INITIAL_STATUS;

/// Receives the status text to render.
///
/// Each call takes a ticket from `begin_call` before it is issued; text from
/// a call older than the one already shown is dropped.
pub trait StatusDisplay: Send + Sync {
    fn begin_call(&self) -> u64;

    /// Returns whether `text` was shown.
    fn set_text(&self, call: u64, text: String) -> bool;
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatusSnapshot {
    pub text: String,
    pub revision: u64,
    /// Ticket of the call whose outcome is shown, 0 before any.
    pub call: u64,
    pub updated_at: DateTime<Utc>,
}

/// Shared status line read by the web panel.
#[derive(Clone)]
pub struct StatusBoard {
    inner: Arc<RwLock<StatusSnapshot>>,
    issued: Arc<AtomicU64>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StatusSnapshot {
                text: INITIAL_STATUS.to_string(),
                revision: 0,
                call: 0,
                updated_at: Utc::now(),
            })),
            issued: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn snapshot(&self) -> StatusSnapshot {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Default for StatusBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusDisplay for StatusBoard {
    fn begin_call(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn set_text(&self, call: u64, text: String) -> bool {
        let mut current = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if call < current.call {
            log::debug!("Dropping status from call {} (showing call {})", call, current.call);
            return false;
        }
        log::info!("Status: {}", text);
        current.text = text;
        current.call = call;
        current.revision += 1;
        current.updated_at = Utc::now();
        true
    }
}
