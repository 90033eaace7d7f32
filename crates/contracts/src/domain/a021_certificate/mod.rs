pub mod aggregate;

pub use aggregate::Certificate;
