use serde::{Deserialize, Serialize};

use crate::domain::a003_employee::aggregate::{self as employee, Employee};
use crate::domain::common::{assigned, Reference, Resource};
use crate::shared::display::DisplayField;
use crate::shared::lookup::LookupSource;
use crate::shared::metadata::FieldMetadata;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Instructor {
    pub instructor_id: i64,
    pub employee_id: i64,
    pub instructor_name: String,
    pub specialization: Option<String>,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<Box<Employee>>,
}

pub const LOOKUP: LookupSource =
    LookupSource::collection("/Instructor/GetInstructors", "instructorId", "instructorName");

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::lookup("employeeId", "Employee", employee::LOOKUP).required(),
    FieldMetadata::text("instructorName", "Instructor Name")
        .required()
        .max_length(100),
    FieldMetadata::text("specialization", "Specialization").max_length(200),
    FieldMetadata::checkbox("isActive", "Active"),
];

const COLUMNS: &[DisplayField] = &[
    DisplayField::text("Instructor", &["instructorName"]),
    DisplayField::text("Specialization", &["specialization"]),
    DisplayField::text("Email", &["employee", "email"]),
    DisplayField::flag("Active", &["isActive"]),
];

const DETAIL: &[DisplayField] = &[
    DisplayField::text("Instructor", &["instructorName"]),
    DisplayField::text("Specialization", &["specialization"]),
    DisplayField::text("Employee", &["employee", "employeeName"]),
    DisplayField::text("Email", &["employee", "email"]),
    DisplayField::text("Contact", &["employee", "contactNo"]),
    DisplayField::text("Department", &["employee", "department", "departmentName"]),
    DisplayField::flag("Active", &["isActive"]),
];

const REFERENCES: &[Reference] = &[Reference::new("employeeId", "Employee", "employee")];

impl Resource for Instructor {
    const NAME: &'static str = "Instructor";
    const PLURAL: &'static str = "Instructors";
    const ID_FIELD: &'static str = "instructorId";
    const ROUTE: &'static str = "instructors";
    const ELEMENT_NAME: &'static str = "Instructor";
    const LIST_NAME: &'static str = "Instructors";

    fn id(&self) -> Option<i64> {
        assigned(self.instructor_id)
    }

    fn set_id(&mut self, id: i64) {
        self.instructor_id = id;
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
