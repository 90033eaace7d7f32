pub mod derived;
pub mod display;
pub mod error;
pub mod form;
pub mod format;
pub mod list_view;
pub mod lookup;
pub mod metadata;
pub mod request_guard;
pub mod service_response;
