//! Field and panel descriptors.
//!
//! All types use 'static data so entity descriptors can be `const`.

use serde_json::Value;

use super::validation::ValidationRules;
use super::widget::Widget;
use crate::shared::display::DisplayField;
use crate::shared::lookup::LookupSource;

/// One input of an entity form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMetadata {
    /// JSON key on the wire (camelCase).
    pub name: &'static str,
    pub label: &'static str,
    pub widget: Widget,
    pub validation: ValidationRules,
    pub placeholder: Option<&'static str>,
    pub hint: Option<&'static str>,
    /// Computed from other fields; shown read-only.
    pub derived: bool,
    /// Filled from a lookup response; shown read-only.
    pub read_only: bool,
    /// Only shown (and validated) while `field == value`.
    pub visible_when: Option<(&'static str, &'static str)>,
}

impl FieldMetadata {
    pub const fn new(name: &'static str, label: &'static str, widget: Widget) -> Self {
        Self {
            name,
            label,
            widget,
            validation: ValidationRules::none(),
            placeholder: None,
            hint: None,
            derived: false,
            read_only: false,
            visible_when: None,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, Widget::Text)
    }

    pub const fn textarea(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, Widget::TextArea)
    }

    pub const fn email(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, Widget::Email)
    }

    pub const fn phone(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, Widget::Phone).placeholder("01XXXXXXXXX")
    }

    pub const fn password(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, Widget::Password)
    }

    pub const fn integer(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, Widget::Integer).min(0.0)
    }

    pub const fn decimal(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, Widget::Decimal)
    }

    /// Non-negative amount.
    pub const fn money(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, Widget::Decimal).min(0.0)
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, Widget::Date)
    }

    pub const fn time(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, Widget::Time)
    }

    pub const fn checkbox(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, Widget::Checkbox)
    }

    pub const fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self::new(name, label, Widget::Choice(options))
    }

    pub const fn lookup(name: &'static str, label: &'static str, source: LookupSource) -> Self {
        Self::new(name, label, Widget::Lookup(source))
    }

    pub const fn file(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, Widget::File)
    }

    pub const fn required(mut self) -> Self {
        self.validation.required = true;
        self
    }

    pub const fn min(mut self, min: f64) -> Self {
        self.validation.min = Some(min);
        self
    }

    pub const fn max(mut self, max: f64) -> Self {
        self.validation.max = Some(max);
        self
    }

    pub const fn max_length(mut self, max: usize) -> Self {
        self.validation.max_length = Some(max);
        self
    }

    pub const fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = Some(text);
        self
    }

    pub const fn hint(mut self, text: &'static str) -> Self {
        self.hint = Some(text);
        self
    }

    pub const fn derived(mut self) -> Self {
        self.derived = true;
        self
    }

    pub const fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub const fn visible_when(mut self, field: &'static str, value: &'static str) -> Self {
        self.visible_when = Some((field, value));
        self
    }

    pub fn is_editable(&self) -> bool {
        !self.derived && !self.read_only
    }

    /// Whether the field is shown for the current form values.
    pub fn is_visible(&self, values: &serde_json::Map<String, Value>) -> bool {
        match self.visible_when {
            None => true,
            Some((field, expected)) => {
                values.get(field).and_then(Value::as_str) == Some(expected)
            }
        }
    }
}

/// A read-only block on a detail page fetched from an id-scoped endpoint,
/// e.g. a visitor's payment summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailPanel {
    pub title: &'static str,
    /// Path the entity id is appended to.
    pub path: &'static str,
    pub fields: &'static [DisplayField],
}

impl DetailPanel {
    pub fn url(&self, id: i64) -> String {
        format!("{}/{}", self.path, id)
    }
}
