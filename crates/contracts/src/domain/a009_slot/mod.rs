pub mod aggregate;

pub use aggregate::Slot;
