//! Read-only rendering of entity values for tables and detail pages.
//!
//! Entities are rendered from their JSON form so one descriptor can reach
//! into nested reference objects (`trainee.registration.traineeName`).
//! Any missing link in the path renders as [`NOT_AVAILABLE`]; the backend
//! does not include the same reference graph for every entity.

use serde_json::Value;

use super::derived::PaymentStatus;
use super::format::{format_date, format_money, format_number, format_percent};

pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayKind {
    Text,
    Date,
    Money,
    Percent,
    Number,
    /// Boolean rendered as Yes/No.
    Flag,
    /// A due amount rendered with its payment status.
    PaymentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayField {
    pub label: &'static str,
    pub path: &'static [&'static str],
    pub kind: DisplayKind,
}

impl DisplayField {
    pub const fn text(label: &'static str, path: &'static [&'static str]) -> Self {
        Self {
            label,
            path,
            kind: DisplayKind::Text,
        }
    }

    pub const fn date(label: &'static str, path: &'static [&'static str]) -> Self {
        Self::text(label, path).kind(DisplayKind::Date)
    }

    pub const fn money(label: &'static str, path: &'static [&'static str]) -> Self {
        Self::text(label, path).kind(DisplayKind::Money)
    }

    pub const fn percent(label: &'static str, path: &'static [&'static str]) -> Self {
        Self::text(label, path).kind(DisplayKind::Percent)
    }

    pub const fn number(label: &'static str, path: &'static [&'static str]) -> Self {
        Self::text(label, path).kind(DisplayKind::Number)
    }

    pub const fn flag(label: &'static str, path: &'static [&'static str]) -> Self {
        Self::text(label, path).kind(DisplayKind::Flag)
    }

    pub const fn payment_status(label: &'static str, path: &'static [&'static str]) -> Self {
        Self::text(label, path).kind(DisplayKind::PaymentStatus)
    }

    pub const fn kind(mut self, kind: DisplayKind) -> Self {
        self.kind = kind;
        self
    }

    /// Render the value this field points at, or `N/A`.
    pub fn render(&self, entity: &Value) -> String {
        let Some(value) = value_at_path(entity, self.path) else {
            return NOT_AVAILABLE.to_string();
        };
        match (self.kind, value) {
            (_, Value::Null) => NOT_AVAILABLE.to_string(),
            (_, Value::String(s)) if s.trim().is_empty() => NOT_AVAILABLE.to_string(),
            (DisplayKind::Date, Value::String(s)) => format_date(s),
            (DisplayKind::Money, v) => v.as_f64().map(format_money).unwrap_or_else(|| plain(v)),
            (DisplayKind::Percent, v) => v.as_f64().map(format_percent).unwrap_or_else(|| plain(v)),
            (DisplayKind::Number, v) => v.as_f64().map(format_number).unwrap_or_else(|| plain(v)),
            (DisplayKind::Flag, Value::Bool(b)) => (if *b { "Yes" } else { "No" }).to_string(),
            (DisplayKind::PaymentStatus, v) => match v.as_f64() {
                Some(due) => {
                    let status = PaymentStatus::of(due);
                    match status {
                        PaymentStatus::Paid => status.label().to_string(),
                        _ => format!("{} ({})", status.label(), format_money(due.abs())),
                    }
                }
                None => plain(v),
            },
            (_, v) => plain(v),
        }
    }

    /// Extra CSS class for the cell, used to flag dues.
    pub fn css_class(&self, entity: &Value) -> Option<&'static str> {
        if self.kind != DisplayKind::PaymentStatus {
            return None;
        }
        value_at_path(entity, self.path)
            .and_then(Value::as_f64)
            .map(|due| PaymentStatus::of(due).css_class())
    }
}

/// Walk `path` through nested objects.
pub fn value_at_path<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, key| current.get(*key))
}

/// Walk a dotted path like `registration.traineeName`.
pub fn value_at_dotted<'a>(value: &'a Value, dotted: &str) -> Option<&'a Value> {
    dotted
        .split('.')
        .try_fold(value, |current, key| current.get(key))
}

/// Text of a scalar JSON value without quotes.
pub fn plain(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.as_f64().map(format_number).unwrap_or_else(|| n.to_string()),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_path_and_fallback() {
        let assessment = json!({
            "assessmentId": 3,
            "trainee": { "traineeId": 9, "registration": { "traineeName": "Rahim" } },
            "batch": null
        });
        let name = DisplayField::text("Trainee", &["trainee", "registration", "traineeName"]);
        let batch = DisplayField::text("Batch", &["batch", "batchName"]);
        let instructor = DisplayField::text("Instructor", &["instructor", "instructorName"]);
        assert_eq!(name.render(&assessment), "Rahim");
        assert_eq!(batch.render(&assessment), NOT_AVAILABLE);
        assert_eq!(instructor.render(&assessment), NOT_AVAILABLE);
    }

    #[test]
    fn test_kinds() {
        let receipt = json!({
            "receiptDate": "2024-05-01T00:00:00",
            "paidAmount": 200.0,
            "dueAmount": 300.0,
            "isActive": true,
            "remarks": ""
        });
        assert_eq!(DisplayField::date("Date", &["receiptDate"]).render(&receipt), "01/05/2024");
        assert_eq!(DisplayField::money("Paid", &["paidAmount"]).render(&receipt), "200.00");
        assert_eq!(
            DisplayField::payment_status("Due", &["dueAmount"]).render(&receipt),
            "Due (300.00)"
        );
        assert_eq!(DisplayField::flag("Active", &["isActive"]).render(&receipt), "Yes");
        assert_eq!(DisplayField::text("Remarks", &["remarks"]).render(&receipt), NOT_AVAILABLE);
    }

    #[test]
    fn test_due_css_class() {
        let due = DisplayField::payment_status("Due", &["dueAmount"]);
        assert_eq!(due.css_class(&json!({"dueAmount": 0})), Some("status status--paid"));
        assert_eq!(due.css_class(&json!({"dueAmount": 10})), Some("status status--due"));
        assert_eq!(DisplayField::text("x", &["x"]).css_class(&json!({})), None);
    }

    #[test]
    fn test_value_at_dotted() {
        let v = json!({"a": {"b": {"c": 1}}});
        assert_eq!(value_at_dotted(&v, "a.b.c"), Some(&json!(1)));
        assert_eq!(value_at_dotted(&v, "a.x"), None);
    }
}
