// src/rpc/client.rs

use async_trait::async_trait;
use futures::FutureExt;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::endpoint::Endpoint;
use crate::errors::{PanelError, Result};
use crate::outcome::Outcome;
use crate::rpc::protocol::{JsonRpcRequest, JsonRpcResponse};

/// Operations exposed by the GLIB control proxy.
#[async_trait]
pub trait GlibControlService: Send + Sync {
    /// Names of the CBCs currently connected to the GLIB board.
    async fn connected_cbc_names(&self, names: Vec<String>) -> Result<Vec<String>>;
}

/// JSON-RPC 2.0 over HTTP POST client for the GLIB control proxy.
///
/// The underlying `reqwest::Client` is used as given; no timeout or retry
/// policy is applied on top of it.
#[derive(Clone)]
pub struct GlibControlClient {
    http: Client,
    endpoint: Endpoint,
}

impl GlibControlClient {
    pub fn new(http: Client, endpoint: Endpoint) -> Self {
        Self { http, endpoint }
    }

    async fn call<P, R>(&self, method: &str, params: P) -> Result<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let request = JsonRpcRequest::new(method, serde_json::to_value(params)?);

        log::info!("Calling {} at {}", method, self.endpoint);

        let start = Instant::now();
        let resp = self
            .http
            .post(self.endpoint.as_str())
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        log::debug!(
            "{} answered with status {} ({}ms)",
            method,
            status,
            start.elapsed().as_millis()
        );

        if !status.is_success() {
            // JSON-RPC servers often pair an error envelope with a 5xx status.
            // Only an envelope that answers this request counts as remote.
            if let Ok(envelope) = serde_json::from_str::<JsonRpcResponse>(&body) {
                if let Err(e @ PanelError::Remote { .. }) = envelope.into_result(&request.id) {
                    return Err(e);
                }
            }
            return Err(PanelError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: JsonRpcResponse = serde_json::from_str(&body)
            .map_err(|e| PanelError::Protocol(format!("invalid response body: {}", e)))?;
        let result = envelope.into_result(&request.id)?;

        Ok(serde_json::from_value(result)?)
    }
}

#[async_trait]
impl GlibControlService for GlibControlClient {
    async fn connected_cbc_names(&self, names: Vec<String>) -> Result<Vec<String>> {
        self.call("connectedCBCNames", json!([names])).await
    }
}

/// Starts a `connectedCBCNames` call and returns at once. `on_outcome` runs
/// exactly once, on the runtime, when the call completes. A panicking
/// service is reported as a `Failure`.
pub fn dispatch<S, F>(service: Arc<S>, names: Vec<String>, on_outcome: F) -> JoinHandle<()>
where
    S: GlibControlService + ?Sized + 'static,
    F: FnOnce(Outcome) + Send + 'static,
{
    tokio::spawn(async move {
        let call = AssertUnwindSafe(service.connected_cbc_names(names)).catch_unwind();
        let outcome = match call.await {
            Ok(Ok(names)) => Outcome::Success(names),
            Ok(Err(e)) => {
                log::warn!("connectedCBCNames failed ({:?}): {}", e.kind(), e);
                Outcome::from_result(Err(e))
            }
            Err(panic) => {
                let why = format!("connectedCBCNames panicked: {}", panic_message(&*panic));
                log::error!("{}", why);
                Outcome::Failure(why)
            }
        };
        on_outcome(outcome);
    })
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s
    } else {
        "unknown cause"
    }
}

/// Future-style form of [`dispatch`].
pub fn request<S>(service: Arc<S>, names: Vec<String>) -> oneshot::Receiver<Outcome>
where
    S: GlibControlService + ?Sized + 'static,
{
    let (tx, rx) = oneshot::channel();
    dispatch(service, names, move |outcome| {
        let _ = tx.send(outcome);
    });
    rx
}
