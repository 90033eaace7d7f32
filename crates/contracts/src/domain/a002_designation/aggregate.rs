use serde::{Deserialize, Serialize};

use crate::domain::a001_department::aggregate::{self as department, Department};
use crate::domain::common::{assigned, Reference, Resource};
use crate::shared::display::DisplayField;
use crate::shared::lookup::LookupSource;
use crate::shared::metadata::FieldMetadata;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Designation {
    pub designation_id: i64,
    pub designation_title: String,
    pub department_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<Box<Department>>,
}

/// Designations of one department; the employee form cascades on it.
pub const BY_DEPARTMENT: LookupSource = LookupSource::scoped(
    "departmentId",
    "/Designation/GetDesignationsByDepartment",
    "designationId",
    "designationTitle",
);

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("designationTitle", "Title")
        .required()
        .max_length(100),
    FieldMetadata::lookup("departmentId", "Department", department::LOOKUP).required(),
];

const COLUMNS: &[DisplayField] = &[
    DisplayField::text("Title", &["designationTitle"]),
    DisplayField::text("Department", &["department", "departmentName"]),
];

const REFERENCES: &[Reference] = &[Reference::new("departmentId", "Department", "department")];

impl Resource for Designation {
    const NAME: &'static str = "Designation";
    const PLURAL: &'static str = "Designations";
    const ID_FIELD: &'static str = "designationId";
    const ROUTE: &'static str = "designations";
    const ELEMENT_NAME: &'static str = "Designation";
    const LIST_NAME: &'static str = "Designations";

    fn id(&self) -> Option<i64> {
        assigned(self.designation_id)
    }

    fn set_id(&mut self, id: i64) {
        self.designation_id = id;
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

    fn references() -> &'static [Reference] {
        REFERENCES
    }
}
