//! In-process stand-in for the GLIB control proxy.
//!
//! Answers `connectedCBCNames` with a fixed list so the panel can be run and
//! tested without test-stand hardware.

use actix_web::{web, HttpResponse};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::rpc::protocol::{error_codes, JsonRpcRequest, JsonRpcResponse, VERSION};

/// Server-side path matching [`crate::endpoint::SERVICE_PATH`] once resolved
/// against a base one directory deep.
pub const PROXY_PATH: &str = "/cbcTestStand/services/GlibControlProxy";

#[derive(Clone)]
pub struct StubProxy {
    names: Arc<Vec<String>>,
}

impl StubProxy {
    pub fn new(names: Vec<String>) -> Self {
        Self { names: Arc::new(names) }
    }

    /// Handle one raw request body
    pub fn handle(&self, body: &[u8]) -> JsonRpcResponse {
        let value: Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(e) => {
                return JsonRpcResponse::error(
                    Value::Null,
                    error_codes::PARSE_ERROR,
                    format!("Parse error: {}", e),
                )
            }
        };

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_REQUEST,
                    format!("Invalid request: {}", e),
                )
            }
        };

        if request.jsonrpc != VERSION {
            return JsonRpcResponse::error(
                request.id,
                error_codes::INVALID_REQUEST,
                format!("Unsupported version '{}'", request.jsonrpc),
            );
        }

        match request.method.as_str() {
            "connectedCBCNames" => {
                match serde_json::from_value::<(Vec<String>,)>(request.params) {
                    Ok(_) => JsonRpcResponse::success(request.id, json!(self.names.as_slice())),
                    Err(e) => JsonRpcResponse::error(
                        request.id,
                        error_codes::INVALID_PARAMS,
                        format!("Invalid params: {}", e),
                    ),
                }
            }
            other => JsonRpcResponse::error(
                request.id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method not found: {}", other),
            ),
        }
    }
}

/// Mount the stub at [`PROXY_PATH`].
pub fn configure_stub(cfg: &mut web::ServiceConfig, stub: StubProxy) {
    cfg.app_data(web::Data::new(stub))
        .route(PROXY_PATH, web::post().to(rpc_handler));
}

async fn rpc_handler(stub: web::Data<StubProxy>, body: web::Bytes) -> HttpResponse {
    HttpResponse::Ok().json(stub.handle(&body))
}
