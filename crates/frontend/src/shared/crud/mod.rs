//! Generic list, form and detail pages driven by entity descriptors.

pub mod detail;
pub mod form;
pub mod list;
pub mod service;

pub use service::{CrudService, ResourceClient};
