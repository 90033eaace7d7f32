//! Client-side validation of form fields

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::widget::Widget;
use crate::shared::format::parse_date;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Local mobile numbers: `01[3-9]` followed by 8 digits, optional `+88`/`88`.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+?88)?01[3-9]\d{8}$").expect("valid phone regex"));

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d(:[0-5]\d)?$").expect("valid time regex"));

/// Validation rules for a field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Check one value. The widget decides the format checks
    /// (email, phone, date, time).
    pub fn validate(&self, widget: &Widget, value: &Value, label: &str) -> Result<(), String> {
        if is_blank(widget, value) {
            if self.required {
                return Err(format!("{} is required", label));
            }
            return Ok(());
        }

        match (widget, value) {
            (Widget::Email, Value::String(s)) if !EMAIL_RE.is_match(s.trim()) => {
                return Err(format!("{} must be a valid email address", label));
            }
            (Widget::Phone, Value::String(s)) if !PHONE_RE.is_match(&compact_phone(s)) => {
                return Err(format!("{} must be a valid mobile number (01XXXXXXXXX)", label));
            }
            (Widget::Date, Value::String(s)) if parse_date(s).is_none() => {
                return Err(format!("{} must be a valid date", label));
            }
            (Widget::Time, Value::String(s)) if !TIME_RE.is_match(s.trim()) => {
                return Err(format!("{} must be a valid time (HH:MM)", label));
            }
            (Widget::Integer | Widget::Decimal, Value::String(_)) => {
                return Err(format!("{} must be a number", label));
            }
            _ => {}
        }

        if let Value::String(s) = value {
            let len = s.trim().chars().count();
            if let Some(min) = self.min_length {
                if len < min {
                    return Err(format!("{} must be at least {} characters", label, min));
                }
            }
            if let Some(max) = self.max_length {
                if len > max {
                    return Err(format!("{} must be at most {} characters", label, max));
                }
            }
        }

        if let Some(number) = value.as_f64() {
            if let Some(min) = self.min {
                if number < min {
                    return Err(format!("{} must be at least {}", label, min));
                }
            }
            if let Some(max) = self.max {
                if number > max {
                    return Err(format!("{} must be at most {}", label, max));
                }
            }
        }

        Ok(())
    }
}

fn is_blank(widget: &Widget, value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        // an unset reference is sent as 0 by the backend
        Value::Number(n) if matches!(widget, Widget::Lookup(_)) => n.as_i64() == Some(0),
        _ => false,
    }
}

fn compact_phone(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace() && *c != '-').collect()
}

/// Field name -> message. Empty means the form may be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first message per field.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::lookup::LookupSource;
    use serde_json::json;

    const REQUIRED: ValidationRules = ValidationRules {
        required: true,
        ..ValidationRules::none()
    };

    #[test]
    fn test_required() {
        assert!(REQUIRED.validate(&Widget::Text, &json!(""), "Name").is_err());
        assert!(REQUIRED.validate(&Widget::Text, &Value::Null, "Name").is_err());
        assert!(REQUIRED.validate(&Widget::Text, &json!("Jane"), "Name").is_ok());
        assert!(ValidationRules::none().validate(&Widget::Email, &json!(""), "Email").is_ok());
    }

    #[test]
    fn test_unset_lookup_is_blank() {
        let widget = Widget::Lookup(LookupSource::collection("/Batch/GetBatches", "batchId", "batchName"));
        assert_eq!(
            REQUIRED.validate(&widget, &json!(0), "Batch"),
            Err("Batch is required".to_string())
        );
        assert!(REQUIRED.validate(&widget, &json!(3), "Batch").is_ok());
    }

    #[test]
    fn test_email_and_phone() {
        let rules = ValidationRules::none();
        assert!(rules.validate(&Widget::Email, &json!("jane@x.com"), "Email").is_ok());
        assert!(rules.validate(&Widget::Email, &json!("jane@x"), "Email").is_err());
        assert!(rules.validate(&Widget::Phone, &json!("01711111111"), "Phone").is_ok());
        assert!(rules.validate(&Widget::Phone, &json!("+8801711111111"), "Phone").is_ok());
        assert!(rules.validate(&Widget::Phone, &json!("017-1111-1111"), "Phone").is_ok());
        assert!(rules.validate(&Widget::Phone, &json!("0121111111"), "Phone").is_err());
    }

    #[test]
    fn test_numeric_bounds() {
        let money = ValidationRules {
            min: Some(0.0),
            ..ValidationRules::none()
        };
        assert!(money.validate(&Widget::Decimal, &json!(-1.0), "Paid").is_err());
        assert!(money.validate(&Widget::Decimal, &json!(0), "Paid").is_ok());
        assert!(money.validate(&Widget::Decimal, &json!("abc"), "Paid").is_err());
    }

    #[test]
    fn test_date_and_time() {
        let rules = ValidationRules::none();
        assert!(rules.validate(&Widget::Date, &json!("2024-02-30"), "Date").is_err());
        assert!(rules.validate(&Widget::Date, &json!("2024-02-29"), "Date").is_ok());
        assert!(rules.validate(&Widget::Time, &json!("09:30"), "Start").is_ok());
        assert!(rules.validate(&Widget::Time, &json!("25:00"), "Start").is_err());
    }

    #[test]
    fn test_field_errors_keep_first_message() {
        let mut errors = FieldErrors::new();
        errors.add("email", "first");
        errors.add("email", "second");
        assert_eq!(errors.get("email"), Some("first"));
        assert_eq!(errors.len(), 1);
    }
}
