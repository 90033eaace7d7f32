//! Common types and traits for all entities

pub mod context;
pub mod paths;
pub mod resource;

pub use context::{BatchTraineeContext, TraineeOption};
pub use paths::{Action, ResourcePaths};
pub use resource::{assigned, Reference, Resource, ResourceInfo};
