pub mod aggregate;

pub use aggregate::Course;
