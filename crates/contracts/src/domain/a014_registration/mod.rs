pub mod aggregate;

pub use aggregate::Registration;
