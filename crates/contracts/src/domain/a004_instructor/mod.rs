pub mod aggregate;

pub use aggregate::Instructor;
