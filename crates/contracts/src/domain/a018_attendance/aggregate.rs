use serde::{Deserialize, Serialize};

use crate::domain::a010_batch::aggregate::{self as batch, Batch};
use crate::domain::a016_trainee::aggregate::{self as trainee, Trainee};
use crate::domain::common::{assigned, Reference, Resource};
use crate::shared::display::DisplayField;
use crate::shared::metadata::FieldMetadata;

/// Presence of one trainee on one class day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Attendance {
    pub attendance_id: i64,
    pub batch_id: i64,
    pub trainee_id: i64,
    pub attendance_date: String,
    pub is_present: bool,
    pub remarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainee: Option<Box<Trainee>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<Box<Batch>>,
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::lookup("batchId", "Batch", batch::LOOKUP).required(),
    FieldMetadata::lookup("traineeId", "Trainee", trainee::by_batch("batchId")).required(),
    FieldMetadata::date("attendanceDate", "Date").required(),
    FieldMetadata::checkbox("isPresent", "Present"),
    FieldMetadata::text("remarks", "Remarks").max_length(200),
];

const COLUMNS: &[DisplayField] = &[
    DisplayField::date("Date", &["attendanceDate"]),
    DisplayField::text("Batch", &["batch", "batchName"]),
    DisplayField::text("Trainee", &["trainee", "traineeName"]),
    DisplayField::flag("Present", &["isPresent"]),
];

const DETAIL: &[DisplayField] = &[
    DisplayField::date("Date", &["attendanceDate"]),
    DisplayField::text("Batch", &["batch", "batchName"]),
    DisplayField::text("Trainee", &["trainee", "traineeName"]),
    DisplayField::flag("Present", &["isPresent"]),
    DisplayField::text("Remarks", &["remarks"]),
];

const REFERENCES: &[Reference] = &[
    Reference::new("traineeId", "Trainee", "trainee"),
    Reference::new("batchId", "Batch", "batch"),
];

impl Resource for Attendance {
    const NAME: &'static str = "Attendance";
    const PLURAL: &'static str = "Attendances";
    const ID_FIELD: &'static str = "attendanceId";
    const ROUTE: &'static str = "attendances";
    const ELEMENT_NAME: &'static str = "Attendance";
    const LIST_NAME: &'static str = "Attendance";

    fn id(&self) -> Option<i64> {
        assigned(self.attendance_id)
    }

    fn set_id(&mut self, id: i64) {
        self.attendance_id = id;
    }

    fn form_fields() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn list_columns() -> &'static [DisplayField] {
        COLUMNS
    }

    fn detail_fields() -> &'static [DisplayField] {
        DETAIL
    }

    fn references() -> &'static [Reference] {
        REFERENCES
    }
}
