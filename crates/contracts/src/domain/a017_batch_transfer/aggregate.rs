use serde::{Deserialize, Serialize};

use crate::domain::a010_batch::aggregate::{self as batch, Batch};
use crate::domain::a016_trainee::aggregate::{self as trainee, Trainee};
use crate::domain::common::{assigned, Reference, Resource};
use crate::shared::display::DisplayField;
use crate::shared::metadata::{FieldErrors, FieldMetadata};

/// Move of a trainee from one batch to another
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchTransfer {
    pub batch_transfer_id: i64,
    pub from_batch_id: i64,
    pub trainee_id: i64,
    pub to_batch_id: i64,
    pub transfer_date: String,
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainee: Option<Box<Trainee>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_batch: Option<Box<Batch>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_batch: Option<Box<Batch>>,
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::lookup("fromBatchId", "From Batch", batch::LOOKUP).required(),
    FieldMetadata::lookup("traineeId", "Trainee", trainee::by_batch("fromBatchId")).required(),
    FieldMetadata::lookup("toBatchId", "To Batch", batch::LOOKUP).required(),
    FieldMetadata::date("transferDate", "Transfer Date").required(),
    FieldMetadata::textarea("reason", "Reason"),
];

const COLUMNS: &[DisplayField] = &[
    DisplayField::text("Trainee", &["trainee", "traineeName"]),
    DisplayField::text("From", &["fromBatch", "batchName"]),
    DisplayField::text("To", &["toBatch", "batchName"]),
    DisplayField::date("Date", &["transferDate"]),
];

const DETAIL: &[DisplayField] = &[
    DisplayField::text("Trainee", &["trainee", "traineeName"]),
    DisplayField::text("From Batch", &["fromBatch", "batchName"]),
    DisplayField::text("To Batch", &["toBatch", "batchName"]),
    DisplayField::date("Transfer Date", &["transferDate"]),
    DisplayField::text("Reason", &["reason"]),
];

const REFERENCES: &[Reference] = &[
    Reference::new("traineeId", "Trainee", "trainee"),
    Reference::new("fromBatchId", "Batch", "fromBatch"),
    Reference::new("toBatchId", "Batch", "toBatch"),
];

impl Resource for BatchTransfer {
    const NAME: &'static str = "BatchTransfer";
    const PLURAL: &'static str = "BatchTransfers";
    const ID_FIELD: &'static str = "batchTransferId";
    const ROUTE: &'static str = "batch-transfers";
    const ELEMENT_NAME: &'static str = "Batch Transfer";
    const LIST_NAME: &'static str = "Batch Transfers";

    fn id(&self) -> Option<i64> {
        assigned(self.batch_transfer_id)
    }

    fn set_id(&mut self, id: i64) {
        self.batch_transfer_id = id;
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

    fn validate(&self, errors: &mut FieldErrors) {
        if self.from_batch_id > 0 && self.from_batch_id == self.to_batch_id {
            errors.add("toBatchId", "To Batch must differ from From Batch");
        }
    }
}
