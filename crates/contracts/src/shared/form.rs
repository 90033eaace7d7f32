//! Form state shared by every entity form.
//!
//! The form edits the entity in its JSON shape so one generic page can bind
//! any entity's fields by name. Converting back to the typed entity strips
//! what only exists on read (nested reference objects) and drops empty
//! values so the entity's serde defaults apply.

use serde_json::{Map, Value};

use super::display::{plain, value_at_dotted};
use super::format::date_input_value;
use super::lookup::{id_of, with_current, LookupOption};
use super::metadata::{FieldErrors, FieldMetadata, Widget};
use crate::domain::common::Resource;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues(Map<String, Value>);

impl FormValues {
    /// Create-mode defaults.
    pub fn defaults<T: Resource>() -> Self {
        Self::from_entity(&T::default())
    }

    /// Edit-mode seed from a fetched entity.
    pub fn from_entity<T: Resource>(entity: &T) -> Self {
        match serde_json::to_value(entity) {
            Ok(Value::Object(map)) => Self(map),
            _ => Self::default(),
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn get(&self, key: &str) -> &Value {
        self.0.get(key).unwrap_or(&Value::Null)
    }

    pub fn set(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_string(), value);
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).as_f64()
    }

    /// Positive id stored in a reference field.
    pub fn id(&self, key: &str) -> Option<i64> {
        id_of(self.get(key)).filter(|id| *id > 0)
    }

    /// Value for the `value`/`prop:value` of the field's input.
    pub fn input_value(&self, field: &FieldMetadata) -> String {
        let value = self.get(field.name);
        match field.widget {
            Widget::Date => value.as_str().map(date_input_value).unwrap_or_default(),
            Widget::Lookup(_) => id_of(value)
                .filter(|id| *id > 0)
                .map(|id| id.to_string())
                .unwrap_or_default(),
            _ => plain(value),
        }
    }

    pub fn is_checked(&self, key: &str) -> bool {
        self.get(key).as_bool().unwrap_or(false)
    }

    /// Store raw input text, typed by the field's widget. Unparseable
    /// numbers are kept as text so validation can report them.
    pub fn set_from_input(&mut self, field: &FieldMetadata, raw: &str) {
        let raw_trimmed = raw.trim();
        let value = match field.widget {
            Widget::Integer => match raw_trimmed {
                "" => Value::Null,
                s => s
                    .parse::<i64>()
                    .map(Value::from)
                    .unwrap_or_else(|_| Value::String(raw.to_string())),
            },
            Widget::Decimal => match raw_trimmed {
                "" => Value::Null,
                s => s
                    .parse::<f64>()
                    .ok()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or_else(|| Value::String(raw.to_string())),
            },
            Widget::Lookup(_) => raw_trimmed
                .parse::<i64>()
                .map(Value::from)
                .unwrap_or(Value::Null),
            Widget::Checkbox => Value::Bool(raw_trimmed == "true"),
            Widget::File => return,
            _ => Value::String(raw.to_string()),
        };
        self.set(field.name, value);
    }

    /// Typed entity for submission.
    pub fn to_entity<T: Resource>(&self) -> Result<T, serde_json::Error> {
        let payload: Map<String, Value> = self
            .0
            .iter()
            .filter(|(_, v)| !v.is_null() && !v.is_object())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        serde_json::from_value(Value::Object(payload))
    }

    /// Recompute derived fields from the current inputs. Numeric inputs
    /// still holding unparseable text count as empty, so one bad field does
    /// not hold back the derivations that never read it.
    pub fn recompute<T: Resource>(&mut self) {
        let mut inputs = self.clone();
        for field in T::form_fields() {
            let numeric = matches!(
                field.widget,
                Widget::Integer | Widget::Decimal | Widget::Lookup(_)
            );
            if numeric && inputs.get(field.name).is_string() {
                inputs.set(field.name, Value::Null);
            }
        }
        let Ok(mut entity) = inputs.to_entity::<T>() else {
            return;
        };
        entity.recompute_derived();
        let Ok(Value::Object(computed)) = serde_json::to_value(&entity) else {
            return;
        };
        for field in T::form_fields().iter().filter(|f| f.derived) {
            if let Some(value) = computed.get(field.name) {
                self.set(field.name, value.clone());
            }
        }
    }

    /// Run field rules for visible fields, then entity rules.
    pub fn validate<T: Resource>(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in T::form_fields() {
            if !field.is_visible(&self.0) || field.derived || matches!(field.widget, Widget::File) {
                continue;
            }
            if let Err(message) = field
                .validation
                .validate(&field.widget, self.get(field.name), field.label)
            {
                errors.add(field.name, message);
            }
        }
        if errors.is_empty() {
            match self.to_entity::<T>() {
                Ok(entity) => entity.validate(&mut errors),
                Err(e) => errors.add("form", format!("Invalid form data: {}", e)),
            }
        }
        errors
    }

    /// The stored selection of a lookup field as an option, labelled from
    /// the nested reference object the backend sent with the entity.
    pub fn current_option<T: Resource>(&self, field: &FieldMetadata) -> Option<LookupOption> {
        let source = field.widget.lookup()?;
        let value = self.id(field.name)?;
        let label = T::references()
            .iter()
            .find(|r| r.fk == field.name)
            .and_then(|r| self.0.get(r.embed_as))
            .and_then(|nested| value_at_dotted(nested, source.label_key))
            .map(plain)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("#{}", value));
        Some(LookupOption { value, label })
    }

    /// Take a lookup response for `field`: copy its autofill values into the
    /// form and return the options, keeping the stored selection listed.
    pub fn apply_lookup<T: Resource>(
        &mut self,
        field: &FieldMetadata,
        response: &Value,
    ) -> Vec<LookupOption> {
        let Some(source) = field.widget.lookup() else {
            return Vec::new();
        };
        let current = self.current_option::<T>(field);
        for (key, value) in source.autofill_values(response) {
            self.set(key, value);
        }
        with_current(source.options(response), current)
    }

    /// Reset the fields that depend on `parent` (their options change).
    pub fn clear_dependents<T: Resource>(&mut self, parent: &str) {
        for field in T::form_fields() {
            let Some(source) = field.widget.lookup() else {
                continue;
            };
            if source.parent == Some(parent) {
                self.set(field.name, Value::Null);
                for (_, target) in source.autofill {
                    self.set(target, Value::Null);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a013_visitor::aggregate::Visitor;
    use crate::domain::a019_assessment::aggregate::Assessment;
    use crate::domain::a022_money_receipt::aggregate::MoneyReceipt;
    use serde_json::json;

    fn field<T: Resource>(name: &str) -> &'static FieldMetadata {
        T::form_fields().iter().find(|f| f.name == name).unwrap()
    }

    #[test]
    fn test_nested_objects_are_not_submitted() {
        let mut values = FormValues::defaults::<Assessment>();
        values.set("batchId", json!(2));
        values.set("traineeId", json!(5));
        values.set("trainee", json!({"traineeId": 5, "registration": {"traineeName": "Rahim"}}));
        let entity: Assessment = values.to_entity().unwrap();
        assert_eq!(entity.trainee_id, 5);
        assert!(entity.trainee.is_none());
        let payload = serde_json::to_value(&entity).unwrap();
        assert!(payload.get("trainee").is_none());
    }

    #[test]
    fn test_assessment_recompute_is_idempotent() {
        let mut values = FormValues::defaults::<Assessment>();
        values.set_from_input(field::<Assessment>("theoreticalScore"), "70");
        values.set_from_input(field::<Assessment>("practicalScore"), "90");
        values.set_from_input(field::<Assessment>("daysPresent"), "8");
        values.set_from_input(field::<Assessment>("totalDays"), "10");
        values.recompute::<Assessment>();
        assert_eq!(values.number("overallScore"), Some(80.0));
        assert_eq!(values.number("attendancePercentage"), Some(80.0));

        let once = values.clone();
        values.recompute::<Assessment>();
        assert_eq!(values, once);
    }

    #[test]
    fn test_recompute_ignores_unrelated_bad_input() {
        let mut values = FormValues::defaults::<Assessment>();
        values.set_from_input(field::<Assessment>("totalDays"), "1x");
        values.set_from_input(field::<Assessment>("theoreticalScore"), "70");
        values.set_from_input(field::<Assessment>("practicalScore"), "90");
        values.recompute::<Assessment>();
        assert_eq!(values.number("overallScore"), Some(80.0));
        assert_eq!(values.get("totalDays"), &json!("1x"));
    }

    #[test]
    fn test_money_receipt_due_recomputed() {
        let mut values = FormValues::defaults::<MoneyReceipt>();
        values.set_from_input(field::<MoneyReceipt>("payableAmount"), "500");
        values.set_from_input(field::<MoneyReceipt>("paidAmount"), "200");
        values.recompute::<MoneyReceipt>();
        assert_eq!(values.number("dueAmount"), Some(300.0));
    }

    #[test]
    fn test_bad_number_keeps_text_and_fails_validation() {
        let mut values = FormValues::defaults::<MoneyReceipt>();
        values.set_from_input(field::<MoneyReceipt>("paidAmount"), "12a");
        assert_eq!(values.get("paidAmount"), &json!("12a"));
        let errors = values.validate::<MoneyReceipt>();
        assert!(errors.get("paidAmount").is_some());
    }

    #[test]
    fn test_hidden_fields_are_not_validated() {
        let mut values = FormValues::defaults::<Visitor>();
        values.set("visitorName", json!("Jane Doe"));
        values.set("contactNo", json!("01711111111"));
        values.set("visitorType", json!("Individual"));
        let errors = values.validate::<Visitor>();
        assert!(errors.get("organizationName").is_none(), "{:?}", errors);

        values.set("visitorType", json!("Organization"));
        let errors = values.validate::<Visitor>();
        assert!(errors.get("organizationName").is_some());
    }

    #[test]
    fn test_clear_dependents() {
        let mut values = FormValues::defaults::<Assessment>();
        values.set("batchId", json!(1));
        values.set("traineeId", json!(9));
        values.set("instructorId", json!(4));
        values.clear_dependents::<Assessment>("batchId");
        assert_eq!(values.get("traineeId"), &Value::Null);
        assert_eq!(values.get("instructorId"), &Value::Null);
        assert_eq!(values.id("batchId"), Some(1));
    }

    #[test]
    fn test_second_batch_choice_wins_over_late_first_response() {
        use crate::shared::request_guard::RequestSequence;

        let trainee = field::<Assessment>("traineeId");
        let sequence = RequestSequence::new();
        let mut values = FormValues::defaults::<Assessment>();

        values.set_from_input(field::<Assessment>("batchId"), "1");
        values.clear_dependents::<Assessment>("batchId");
        let batch_a = sequence.issue();

        values.set_from_input(field::<Assessment>("batchId"), "2");
        values.clear_dependents::<Assessment>("batchId");
        let batch_b = sequence.issue();

        let response_a = json!({
            "instructorId": 3,
            "trainees": [{"traineeId": 10, "traineeName": "From A"}]
        });
        let response_b = json!({
            "instructorId": 4,
            "trainees": [{"traineeId": 20, "traineeName": "From B"}]
        });

        // B answers first, A straggles in afterwards
        let mut options = Vec::new();
        for (ticket, response) in [(&batch_b, &response_b), (&batch_a, &response_a)] {
            if ticket.is_current() {
                options = values.apply_lookup::<Assessment>(trainee, response);
            }
        }

        assert_eq!(options.iter().map(|o| o.value).collect::<Vec<_>>(), vec![20]);
        assert_eq!(values.id("instructorId"), Some(4));
        assert_eq!(values.id("batchId"), Some(2));
        assert_eq!(values.get("traineeId"), &Value::Null);
    }

    #[test]
    fn test_apply_lookup_keeps_stored_selection() {
        let mut values = FormValues::defaults::<Assessment>();
        values.set("batchId", json!(2));
        values.set("traineeId", json!(5));
        values.set("trainee", json!({"traineeId": 5, "traineeName": "Rahim"}));
        let response = json!({"instructorId": 4, "trainees": []});
        let options = values.apply_lookup::<Assessment>(field::<Assessment>("traineeId"), &response);
        assert_eq!(options, vec![LookupOption { value: 5, label: "Rahim".into() }]);
    }

    #[test]
    fn test_current_option_label_from_nested_reference() {
        let assessment: Assessment = serde_json::from_value(json!({
            "assessmentId": 1,
            "batchId": 2,
            "traineeId": 5,
            "trainee": {"traineeId": 5, "traineeName": "Rahim"}
        }))
        .unwrap();
        let values = FormValues::from_entity(&assessment);
        let option = values.current_option::<Assessment>(field::<Assessment>("traineeId")).unwrap();
        assert_eq!(option.value, 5);
        assert_eq!(option.label, "Rahim");
        assert_eq!(values.current_option::<Assessment>(field::<Assessment>("instructorId")), None);
    }

    #[test]
    fn test_lookup_input_value() {
        let mut values = FormValues::defaults::<Assessment>();
        let batch = field::<Assessment>("batchId");
        assert_eq!(values.input_value(batch), "");
        values.set_from_input(batch, "3");
        assert_eq!(values.input_value(batch), "3");
    }
}
