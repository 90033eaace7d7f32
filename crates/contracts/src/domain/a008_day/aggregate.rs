use serde::{Deserialize, Serialize};

use crate::domain::common::{assigned, Resource};
use crate::shared::display::DisplayField;
use crate::shared::lookup::LookupSource;
use crate::shared::metadata::FieldMetadata;

pub const WEEK_DAYS: &[&str] = &[
    "Saturday",
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Day {
    pub day_id: i64,
    pub day_name: String,
}

pub const LOOKUP: LookupSource = LookupSource::collection("/Day/GetDays", "dayId", "dayName");

const FIELDS: &[FieldMetadata] = &[FieldMetadata::choice("dayName", "Day", WEEK_DAYS).required()];

const COLUMNS: &[DisplayField] = &[DisplayField::text("Day", &["dayName"])];

impl Resource for Day {
    const NAME: &'static str = "Day";
    const PLURAL: &'static str = "Days";
    const ID_FIELD: &'static str = "dayId";
    const ROUTE: &'static str = "days";
    const ELEMENT_NAME: &'static str = "Day";
    const LIST_NAME: &'static str = "Days";

    fn id(&self) -> Option<i64> {
        assigned(self.day_id)
    }

    fn set_id(&mut self, id: i64) {
        self.day_id = id;
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
}
