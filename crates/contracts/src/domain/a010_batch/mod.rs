pub mod aggregate;

pub use aggregate::Batch;
