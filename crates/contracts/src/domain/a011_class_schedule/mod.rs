pub mod aggregate;

pub use aggregate::ClassSchedule;
