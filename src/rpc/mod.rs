// src/rpc/mod.rs
pub mod client;
pub mod protocol;

pub use client::{dispatch, request, GlibControlClient, GlibControlService};
pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
