//! Derived form values.
//!
//! These are previews: the form recomputes them on every keystroke so the
//! user sees the figure, and the backend recomputes them again on save.
//! All functions are pure, so recomputing with the same inputs is a no-op.

use serde::{Deserialize, Serialize};

/// Attendance percentage rounded to a whole number.
/// `None` while `total_days` is not a positive number.
pub fn attendance_percentage(days_present: f64, total_days: f64) -> Option<f64> {
    if !(total_days > 0.0) || days_present < 0.0 {
        return None;
    }
    Some((days_present / total_days * 100.0).round())
}

/// Mean of the theoretical and practical scores, rounded to a whole number.
pub fn overall_score(theoretical: f64, practical: f64) -> f64 {
    ((theoretical + practical) / 2.0).round()
}

/// Amount still owed on a receipt, rounded to cents. Not clamped: a negative
/// value means an overpayment and is flagged by [`PaymentStatus`].
pub fn due_amount(payable: f64, paid: f64) -> f64 {
    round_money(payable - paid)
}

/// Admission payable after discount, never below zero.
pub fn payable_after_discount(total_fee: f64, discount: f64) -> f64 {
    round_money((total_fee - discount).max(0.0))
}

pub fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Due,
    Overpaid,
}

impl PaymentStatus {
    pub fn of(due: f64) -> Self {
        let due = round_money(due);
        if due > 0.0 {
            Self::Due
        } else if due < 0.0 {
            Self::Overpaid
        } else {
            Self::Paid
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Due => "Due",
            Self::Overpaid => "Overpaid",
        }
    }

    /// CSS modifier used by tables and detail pages.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Paid => "status status--paid",
            Self::Due => "status status--due",
            Self::Overpaid => "status status--overpaid",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attendance_percentage() {
        assert_eq!(attendance_percentage(8.0, 10.0), Some(80.0));
        assert_eq!(attendance_percentage(2.0, 3.0), Some(67.0));
        assert_eq!(attendance_percentage(5.0, 0.0), None);
        assert_eq!(attendance_percentage(-1.0, 10.0), None);
    }

    #[test]
    fn test_overall_score_is_rounded_mean() {
        assert_eq!(overall_score(70.0, 90.0), 80.0);
        assert_eq!(overall_score(70.0, 81.0), 76.0);
    }

    #[test]
    fn test_due_amount_and_status() {
        assert_eq!(due_amount(500.0, 200.0), 300.0);
        assert_eq!(PaymentStatus::of(due_amount(500.0, 200.0)), PaymentStatus::Due);
        assert_eq!(PaymentStatus::of(due_amount(500.0, 500.0)), PaymentStatus::Paid);
        assert_eq!(PaymentStatus::of(due_amount(500.0, 650.0)), PaymentStatus::Overpaid);
        assert_eq!(due_amount(100.1, 0.2), 99.9);
    }

    #[test]
    fn test_payable_after_discount() {
        assert_eq!(payable_after_discount(15000.0, 2500.0), 12500.0);
        assert_eq!(payable_after_discount(1000.0, 2000.0), 0.0);
    }
}
