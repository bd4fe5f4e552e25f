// src/lib.rs
pub mod api;
pub mod banner;
pub mod config;
pub mod display;
pub mod endpoint;
pub mod errors;
pub mod outcome;
pub mod rpc;
pub mod stub;
