// src/api/handlers/mod.rs
mod assets;
mod health;
mod status;

pub use assets::serve_asset;
pub use health::health_check;
pub use status::{get_status, refresh};
