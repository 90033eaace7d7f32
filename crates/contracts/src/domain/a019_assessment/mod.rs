pub mod aggregate;

pub use aggregate::Assessment;
