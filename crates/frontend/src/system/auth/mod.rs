//! Console login state: the session lives in memory and in local storage.

pub mod api;
pub mod context;
pub mod guard;
pub mod storage;
