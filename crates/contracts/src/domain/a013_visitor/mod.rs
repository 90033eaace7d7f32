pub mod aggregate;

pub use aggregate::{Visitor, VisitorPaymentSummary};
