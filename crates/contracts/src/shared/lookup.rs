//! Dropdown sources for reference fields.
//!
//! A lookup is either a plain collection fetched once when the form mounts,
//! or a *scoped* source whose URL depends on another field of the same form
//! (the cascading dropdown: pick a batch, get that batch's trainees).
//! Scoped responses may also carry values copied into read-only siblings.

use serde_json::Value;

use super::display::{plain, value_at_dotted};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupSource {
    /// Backend path. For scoped sources the parent id is appended.
    pub path: &'static str,
    /// Form field whose value scopes this source.
    pub parent: Option<&'static str>,
    /// Key of the option array inside an object response.
    pub items_key: Option<&'static str>,
    pub value_key: &'static str,
    /// Dotted path to the option label inside each item.
    pub label_key: &'static str,
    /// `(response key, form field)` pairs copied into the form on load.
    pub autofill: &'static [(&'static str, &'static str)],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOption {
    pub value: i64,
    pub label: String,
}

impl LookupSource {
    pub const fn collection(
        path: &'static str,
        value_key: &'static str,
        label_key: &'static str,
    ) -> Self {
        Self {
            path,
            parent: None,
            items_key: None,
            value_key,
            label_key,
            autofill: &[],
        }
    }

    pub const fn scoped(
        parent: &'static str,
        path: &'static str,
        value_key: &'static str,
        label_key: &'static str,
    ) -> Self {
        Self {
            path,
            parent: Some(parent),
            items_key: None,
            value_key,
            label_key,
            autofill: &[],
        }
    }

    pub const fn items(mut self, key: &'static str) -> Self {
        self.items_key = Some(key);
        self
    }

    pub const fn autofill(mut self, pairs: &'static [(&'static str, &'static str)]) -> Self {
        self.autofill = pairs;
        self
    }

    pub fn is_scoped(&self) -> bool {
        self.parent.is_some()
    }

    /// URL path to fetch. A scoped source has nothing to fetch until its
    /// parent has a value.
    pub fn url(&self, parent_id: Option<i64>) -> Option<String> {
        match self.parent {
            None => Some(self.path.to_string()),
            Some(_) => parent_id
                .filter(|id| *id > 0)
                .map(|id| format!("{}/{}", self.path, id)),
        }
    }

    /// Options found in a response, in response order.
    pub fn options(&self, response: &Value) -> Vec<LookupOption> {
        let items = match self.items_key {
            Some(key) => response.get(key),
            None => Some(response),
        };
        let Some(Value::Array(items)) = items else {
            return Vec::new();
        };

        items
            .iter()
            .filter_map(|item| {
                let value = id_of(item.get(self.value_key)?)?;
                let label = value_at_dotted(item, self.label_key)
                    .map(plain)
                    .filter(|s| !s.trim().is_empty())
                    .unwrap_or_else(|| format!("#{}", value));
                Some(LookupOption { value, label })
            })
            .collect()
    }

    /// Values to copy into sibling form fields.
    pub fn autofill_values(&self, response: &Value) -> Vec<(&'static str, Value)> {
        self.autofill
            .iter()
            .map(|(from, to)| (*to, response.get(*from).cloned().unwrap_or(Value::Null)))
            .collect()
    }
}

/// Keep a persisted selection selectable when the source no longer lists
/// it, e.g. the trainee of an existing assessment is not "eligible" anymore.
pub fn with_current(mut options: Vec<LookupOption>, current: Option<LookupOption>) -> Vec<LookupOption> {
    if let Some(current) = current {
        if !options.iter().any(|o| o.value == current.value) {
            options.insert(0, current);
        }
    }
    options
}

/// Numeric id from a JSON value; ids arrive as numbers or numeric strings.
pub fn id_of(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const COURSES: LookupSource = LookupSource::collection("/Course/GetCourses", "courseId", "courseName");
    const ELIGIBLE: LookupSource = LookupSource::scoped(
        "batchId",
        "/Assessment/GetBatchAssessmentContext",
        "traineeId",
        "traineeName",
    )
    .items("trainees")
    .autofill(&[("instructorId", "instructorId"), ("instructorName", "instructorName")]);

    #[test]
    fn test_collection_options() {
        let response = json!([
            {"courseId": 1, "courseName": "Web Development"},
            {"courseId": "2", "courseName": ""},
            {"courseName": "missing id"}
        ]);
        let options = COURSES.options(&response);
        assert_eq!(
            options,
            vec![
                LookupOption { value: 1, label: "Web Development".into() },
                LookupOption { value: 2, label: "#2".into() },
            ]
        );
        assert_eq!(COURSES.url(None).as_deref(), Some("/Course/GetCourses"));
    }

    #[test]
    fn test_scoped_url_requires_parent() {
        assert_eq!(ELIGIBLE.url(None), None);
        assert_eq!(ELIGIBLE.url(Some(0)), None);
        assert_eq!(
            ELIGIBLE.url(Some(7)).as_deref(),
            Some("/Assessment/GetBatchAssessmentContext/7")
        );
    }

    #[test]
    fn test_scoped_options_and_autofill() {
        let response = json!({
            "batchId": 7,
            "instructorId": 4,
            "instructorName": "Karim",
            "trainees": [{"traineeId": 11, "traineeName": "Jane Doe"}]
        });
        assert_eq!(ELIGIBLE.options(&response).len(), 1);
        assert_eq!(
            ELIGIBLE.autofill_values(&response),
            vec![("instructorId", json!(4)), ("instructorName", json!("Karim"))]
        );
    }

    #[test]
    fn test_with_current_keeps_selection() {
        let options = vec![LookupOption { value: 2, label: "B".into() }];
        let current = Some(LookupOption { value: 1, label: "A".into() });
        let merged = with_current(options.clone(), current);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].value, 1);

        let listed = Some(LookupOption { value: 2, label: "B".into() });
        assert_eq!(with_current(options, listed).len(), 1);
    }

    #[test]
    fn test_dotted_labels() {
        let source = LookupSource::collection("/Trainee/GetTrainees", "traineeId", "registration.traineeName");
        let response = json!([{"traineeId": 5, "registration": {"traineeName": "Rahim"}}]);
        assert_eq!(source.options(&response)[0].label, "Rahim");
    }
}
