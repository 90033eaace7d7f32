pub mod config;
pub mod error;
pub mod format;
pub mod seed;
pub mod state;
pub mod store;
