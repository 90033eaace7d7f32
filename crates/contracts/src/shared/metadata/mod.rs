//! Compile-time descriptors for entity forms, tables and detail pages.
//!
//! Every entity declares its fields once as `'static` constants; the generic
//! list/form/detail pages and the validation below are driven by them.
//!
//! ```rust,ignore
//! use contracts::shared::metadata::FieldMetadata;
//!
//! const FIELDS: &[FieldMetadata] = &[
//!     FieldMetadata::text("batchName", "Batch name").required(),
//!     FieldMetadata::date("startDate", "Start date").required(),
//! ];
//! ```

mod types;
mod validation;
mod widget;

pub use types::{DetailPanel, FieldMetadata};
pub use validation::{FieldErrors, ValidationRules};
pub use widget::Widget;
