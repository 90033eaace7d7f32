use serde::{Deserialize, Serialize};

use crate::domain::a004_instructor::aggregate::{self as instructor, Instructor};
use crate::domain::a010_batch::aggregate::{self as batch, Batch};
use crate::domain::a016_trainee::aggregate::Trainee;
use crate::domain::common::{assigned, Reference, Resource};
use crate::shared::display::DisplayField;
use crate::shared::lookup::LookupSource;
use crate::shared::metadata::FieldMetadata;

pub const STATUSES: &[&str] = &["Pending", "Recommended", "Not Recommended"];

/// Status that makes a trainee eligible for a certificate.
pub const RECOMMENDED: &str = "Recommended";

/// Instructor's verdict on an assessed trainee
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recommendation {
    pub recommendation_id: i64,
    pub batch_id: i64,
    pub trainee_id: i64,
    pub instructor_id: i64,
    pub recommendation_date: String,
    pub recommendation_text: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainee: Option<Box<Trainee>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<Box<Batch>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<Box<Instructor>>,
}

impl Recommendation {
    pub fn is_recommended(&self) -> bool {
        self.status == RECOMMENDED
    }
}

pub const CONTEXT_ACTION: &str = "GetBatchRecommendationContext";

/// Assessed trainees of the batch without a recommendation yet.
pub const ELIGIBLE_TRAINEES: LookupSource = LookupSource::scoped(
    "batchId",
    "/Recommendation/GetBatchRecommendationContext",
    "traineeId",
    "traineeName",
)
.items("trainees")
.autofill(&[("instructorId", "instructorId")]);

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::lookup("batchId", "Batch", batch::LOOKUP).required(),
    FieldMetadata::lookup("traineeId", "Trainee", ELIGIBLE_TRAINEES).required(),
    FieldMetadata::lookup("instructorId", "Instructor", instructor::LOOKUP)
        .required()
        .read_only(),
    FieldMetadata::date("recommendationDate", "Date").required(),
    FieldMetadata::choice("status", "Status", STATUSES).required(),
    FieldMetadata::textarea("recommendationText", "Recommendation").max_length(1000),
];

const COLUMNS: &[DisplayField] = &[
    DisplayField::text("Trainee", &["trainee", "registration", "traineeName"]),
    DisplayField::text("Batch", &["batch", "batchName"]),
    DisplayField::text("Instructor", &["instructor", "instructorName"]),
    DisplayField::date("Date", &["recommendationDate"]),
    DisplayField::text("Status", &["status"]),
];

const DETAIL: &[DisplayField] = &[
    DisplayField::text("Trainee", &["trainee", "registration", "traineeName"]),
    DisplayField::text("Batch", &["batch", "batchName"]),
    DisplayField::text("Instructor", &["instructor", "instructorName"]),
    DisplayField::date("Date", &["recommendationDate"]),
    DisplayField::text("Status", &["status"]),
    DisplayField::text("Recommendation", &["recommendationText"]),
];

const REFERENCES: &[Reference] = &[
    Reference::new("traineeId", "Trainee", "trainee"),
    Reference::new("batchId", "Batch", "batch"),
    Reference::new("instructorId", "Instructor", "instructor"),
];

impl Resource for Recommendation {
    const NAME: &'static str = "Recommendation";
    const PLURAL: &'static str = "Recommendations";
    const ID_FIELD: &'static str = "recommendationId";
    const ROUTE: &'static str = "recommendations";
    const ELEMENT_NAME: &'static str = "Recommendation";
    const LIST_NAME: &'static str = "Recommendations";

    fn id(&self) -> Option<i64> {
        assigned(self.recommendation_id)
    }

    fn set_id(&mut self, id: i64) {
        self.recommendation_id = id;
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
