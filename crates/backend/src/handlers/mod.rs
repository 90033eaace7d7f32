pub mod employee;
pub mod lookups;
pub mod resource;
