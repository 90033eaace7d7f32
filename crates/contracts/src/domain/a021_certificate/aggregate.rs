use serde::{Deserialize, Serialize};

use crate::domain::a010_batch::aggregate::{self as batch, Batch};
use crate::domain::a016_trainee::aggregate::Trainee;
use crate::domain::common::{assigned, Reference, Resource};
use crate::shared::display::DisplayField;
use crate::shared::lookup::LookupSource;
use crate::shared::metadata::FieldMetadata;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certificate {
    pub certificate_id: i64,
    pub batch_id: i64,
    pub trainee_id: i64,
    pub certificate_number: String,
    pub issue_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainee: Option<Box<Trainee>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<Box<Batch>>,
}

pub const CONTEXT_ACTION: &str = "GetBatchCertificateContext";

/// Recommended trainees of the batch without a certificate yet.
pub const ELIGIBLE_TRAINEES: LookupSource = LookupSource::scoped(
    "batchId",
    "/Certificate/GetBatchCertificateContext",
    "traineeId",
    "traineeName",
)
.items("trainees");

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::lookup("batchId", "Batch", batch::LOOKUP).required(),
    FieldMetadata::lookup("traineeId", "Trainee", ELIGIBLE_TRAINEES).required(),
    FieldMetadata::text("certificateNumber", "Certificate No")
        .required()
        .max_length(50),
    FieldMetadata::date("issueDate", "Issue Date").required(),
];

const COLUMNS: &[DisplayField] = &[
    DisplayField::text("Certificate No", &["certificateNumber"]),
    DisplayField::text("Trainee", &["trainee", "registration", "traineeName"]),
    DisplayField::text("Batch", &["batch", "batchName"]),
    DisplayField::date("Issued", &["issueDate"]),
];

const DETAIL: &[DisplayField] = &[
    DisplayField::text("Certificate No", &["certificateNumber"]),
    DisplayField::text("Trainee", &["trainee", "registration", "traineeName"]),
    DisplayField::text("Email", &["trainee", "registration", "email"]),
    DisplayField::text("Batch", &["batch", "batchName"]),
    DisplayField::text("Course", &["batch", "course", "courseName"]),
    DisplayField::date("Issued", &["issueDate"]),
];

const REFERENCES: &[Reference] = &[
    Reference::new("traineeId", "Trainee", "trainee"),
    Reference::new("batchId", "Batch", "batch"),
];

impl Resource for Certificate {
    const NAME: &'static str = "Certificate";
    const PLURAL: &'static str = "Certificates";
    const ID_FIELD: &'static str = "certificateId";
    const ROUTE: &'static str = "certificates";
    const ELEMENT_NAME: &'static str = "Certificate";
    const LIST_NAME: &'static str = "Certificates";

    fn id(&self) -> Option<i64> {
        assigned(self.certificate_id)
    }

    fn set_id(&mut self, id: i64) {
        self.certificate_id = id;
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
