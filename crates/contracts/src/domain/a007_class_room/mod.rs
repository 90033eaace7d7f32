pub mod aggregate;

pub use aggregate::ClassRoom;
