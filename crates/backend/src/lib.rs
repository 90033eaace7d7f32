//! Development REST backend for the training-center console.
//!
//! Serves every entity controller from an in-memory store behind bearer
//! token authentication.

pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

pub use routes::build_app;
pub use shared::config::{load_config, Config};
pub use shared::state::AppState;
