use serde::{Deserialize, Serialize};

use crate::domain::common::{assigned, Resource};
use crate::shared::display::DisplayField;
use crate::shared::lookup::LookupSource;
use crate::shared::metadata::FieldMetadata;

/// Organisational unit employees belong to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Department {
    pub department_id: i64,
    pub department_name: String,
    pub description: Option<String>,
}

pub const LOOKUP: LookupSource =
    LookupSource::collection("/Department/GetDepartments", "departmentId", "departmentName");

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("departmentName", "Department Name")
        .required()
        .max_length(100),
    FieldMetadata::textarea("description", "Description").max_length(500),
];

const COLUMNS: &[DisplayField] = &[
    DisplayField::text("Department", &["departmentName"]),
    DisplayField::text("Description", &["description"]),
];

impl Resource for Department {
    const NAME: &'static str = "Department";
    const PLURAL: &'static str = "Departments";
    const ID_FIELD: &'static str = "departmentId";
    const ROUTE: &'static str = "departments";
    const ELEMENT_NAME: &'static str = "Department";
    const LIST_NAME: &'static str = "Departments";

    fn id(&self) -> Option<i64> {
        assigned(self.department_id)
    }

    fn set_id(&mut self, id: i64) {
        self.department_id = id;
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
