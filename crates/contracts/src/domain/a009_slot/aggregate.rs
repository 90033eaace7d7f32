use serde::{Deserialize, Serialize};

use crate::domain::common::{assigned, Resource};
use crate::shared::display::DisplayField;
use crate::shared::lookup::LookupSource;
use crate::shared::metadata::{FieldErrors, FieldMetadata};

/// A time window classes are scheduled into
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Slot {
    pub slot_id: i64,
    pub slot_name: String,
    /// `HH:MM`
    pub start_time: String,
    /// `HH:MM`
    pub end_time: String,
}

pub const LOOKUP: LookupSource = LookupSource::collection("/Slot/GetSlots", "slotId", "slotName");

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("slotName", "Slot Name")
        .required()
        .max_length(50),
    FieldMetadata::time("startTime", "Start Time").required(),
    FieldMetadata::time("endTime", "End Time").required(),
];

const COLUMNS: &[DisplayField] = &[
    DisplayField::text("Slot", &["slotName"]),
    DisplayField::text("Start", &["startTime"]),
    DisplayField::text("End", &["endTime"]),
];

impl Resource for Slot {
    const NAME: &'static str = "Slot";
    const PLURAL: &'static str = "Slots";
    const ID_FIELD: &'static str = "slotId";
    const ROUTE: &'static str = "slots";
    const ELEMENT_NAME: &'static str = "Slot";
    const LIST_NAME: &'static str = "Slots";

    fn id(&self) -> Option<i64> {
        assigned(self.slot_id)
    }

    fn set_id(&mut self, id: i64) {
        self.slot_id = id;
    }

    fn form_fields() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn list_columns() -> &'static [DisplayField] {
        COLUMNS
    }

    fn detail_fields() -> &'static [DisplayField] {
        COLUMNS
    }

    fn validate(&self, errors: &mut FieldErrors) {
        // zero padded HH:MM compares correctly as text
        if self.end_time.as_str() <= self.start_time.as_str() {
            errors.add("endTime", "End Time must be after Start Time");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_after_start() {
        let mut slot = Slot {
            slot_name: "Morning".into(),
            start_time: "09:00".into(),
            end_time: "08:30".into(),
            ..Default::default()
        };
        let mut errors = FieldErrors::new();
        slot.validate(&mut errors);
        assert!(errors.get("endTime").is_some());

        slot.end_time = "11:00".into();
        let mut errors = FieldErrors::new();
        slot.validate(&mut errors);
        assert!(errors.is_empty());
    }
}
