use serde::{Deserialize, Serialize};

use crate::domain::a010_batch::aggregate::{self as batch, Batch};
use crate::domain::a014_registration::aggregate::{self as registration, Registration};
use crate::domain::common::{assigned, Reference, Resource};
use crate::shared::display::DisplayField;
use crate::shared::lookup::LookupSource;
use crate::shared::metadata::FieldMetadata;

/// A registered person placed in a batch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Trainee {
    pub trainee_id: i64,
    pub registration_id: i64,
    pub batch_id: i64,
    pub trainee_name: String,
    pub enrollment_date: String,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration: Option<Box<Registration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<Box<Batch>>,
}

pub const OPTIONS_ACTION: &str = "GetTraineeOptions";
pub const BY_BATCH_ACTION: &str = "GetTraineesByBatch";

/// All trainees as `{traineeId, traineeName}` pairs.
pub const LOOKUP: LookupSource =
    LookupSource::collection("/Trainee/GetTraineeOptions", "traineeId", "traineeName");

/// Trainees of the batch picked in `parent`.
pub const fn by_batch(parent: &'static str) -> LookupSource {
    LookupSource::scoped(parent, "/Trainee/GetTraineesByBatch", "traineeId", "traineeName")
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::lookup("registrationId", "Registration", registration::LOOKUP).required(),
    FieldMetadata::lookup("batchId", "Batch", batch::LOOKUP).required(),
    FieldMetadata::text("traineeName", "Trainee Name")
        .required()
        .max_length(100),
    FieldMetadata::date("enrollmentDate", "Enrollment Date").required(),
    FieldMetadata::checkbox("isActive", "Active"),
];

const COLUMNS: &[DisplayField] = &[
    DisplayField::text("Trainee", &["traineeName"]),
    DisplayField::text("Batch", &["batch", "batchName"]),
    DisplayField::text("Contact", &["registration", "contactNo"]),
    DisplayField::date("Enrolled", &["enrollmentDate"]),
    DisplayField::flag("Active", &["isActive"]),
];

const DETAIL: &[DisplayField] = &[
    DisplayField::text("Trainee", &["traineeName"]),
    DisplayField::text("Email", &["registration", "email"]),
    DisplayField::text("Contact", &["registration", "contactNo"]),
    DisplayField::text("Gender", &["registration", "gender"]),
    DisplayField::text("Batch", &["batch", "batchName"]),
    DisplayField::text("Course", &["batch", "course", "courseName"]),
    DisplayField::date("Enrolled", &["enrollmentDate"]),
    DisplayField::flag("Active", &["isActive"]),
];

const REFERENCES: &[Reference] = &[
    Reference::new("registrationId", "Registration", "registration"),
    Reference::new("batchId", "Batch", "batch"),
];

impl Resource for Trainee {
    const NAME: &'static str = "Trainee";
    const PLURAL: &'static str = "Trainees";
    const ID_FIELD: &'static str = "traineeId";
    const ROUTE: &'static str = "trainees";
    const ELEMENT_NAME: &'static str = "Trainee";
    const LIST_NAME: &'static str = "Trainees";

    fn id(&self) -> Option<i64> {
        assigned(self.trainee_id)
    }

    fn set_id(&mut self, id: i64) {
        self.trainee_id = id;
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
