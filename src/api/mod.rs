//! HTTP surface of the panel: JSON status API and the embedded page.
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::{configure_assets, configure_routes};
pub use state::AppState;
