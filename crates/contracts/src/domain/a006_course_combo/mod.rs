pub mod aggregate;

pub use aggregate::CourseCombo;
