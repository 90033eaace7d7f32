pub mod aggregate;

pub use aggregate::BatchTransfer;
