//! Types shared between the training-center console and its REST backend.
//!
//! - `domain`: one module per business entity plus the `Resource` descriptor trait
//! - `shared`: metadata, form state, derived fields, lookups, list querying, errors
//! - `system`: authentication and session handling

pub mod domain;
pub mod shared;
pub mod system;
