use serde::{Deserialize, Serialize};

use crate::domain::a001_department::aggregate::{self as department, Department};
use crate::domain::a002_designation::aggregate::{self as designation, Designation};
use crate::domain::common::{assigned, Reference, Resource};
use crate::shared::display::DisplayField;
use crate::shared::lookup::LookupSource;
use crate::shared::metadata::{FieldErrors, FieldMetadata};

/// Staff member.
///
/// The Employee controller differs from the others: every response is
/// wrapped in a `ServiceResponse` envelope, and insert/update take
/// multipart form data with optional `imageFile`/`documentFile` parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Employee {
    pub employee_id: i64,
    pub employee_name: String,
    pub email: String,
    pub contact_no: String,
    pub department_id: i64,
    pub designation_id: i64,
    pub joining_date: String,
    pub is_active: bool,
    /// Write only.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    /// Write only.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub confirm_password: String,
    pub image_path: Option<String>,
    pub document_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<Box<Department>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<Box<Designation>>,
}

/// Employee lists come inside the envelope's `data`.
pub const LOOKUP: LookupSource =
    LookupSource::collection("/Employee/GetEmployees", "employeeId", "employeeName").items("data");

pub const IMAGE_FILE: &str = "imageFile";
pub const DOCUMENT_FILE: &str = "documentFile";

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("employeeName", "Name")
        .required()
        .max_length(100),
    FieldMetadata::email("email", "Email").required(),
    FieldMetadata::phone("contactNo", "Contact No").required(),
    FieldMetadata::lookup("departmentId", "Department", department::LOOKUP).required(),
    FieldMetadata::lookup("designationId", "Designation", designation::BY_DEPARTMENT).required(),
    FieldMetadata::date("joiningDate", "Joining Date").required(),
    FieldMetadata::checkbox("isActive", "Active"),
    FieldMetadata::password("password", "Password").hint("Leave blank to keep the current password"),
    FieldMetadata::password("confirmPassword", "Confirm Password"),
    FieldMetadata::file(IMAGE_FILE, "Photo"),
    FieldMetadata::file(DOCUMENT_FILE, "Document"),
];

const COLUMNS: &[DisplayField] = &[
    DisplayField::text("Name", &["employeeName"]),
    DisplayField::text("Email", &["email"]),
    DisplayField::text("Contact", &["contactNo"]),
    DisplayField::text("Department", &["department", "departmentName"]),
    DisplayField::text("Designation", &["designation", "designationTitle"]),
    DisplayField::flag("Active", &["isActive"]),
];

const DETAIL: &[DisplayField] = &[
    DisplayField::text("Name", &["employeeName"]),
    DisplayField::text("Email", &["email"]),
    DisplayField::text("Contact", &["contactNo"]),
    DisplayField::text("Department", &["department", "departmentName"]),
    DisplayField::text("Designation", &["designation", "designationTitle"]),
    DisplayField::date("Joining Date", &["joiningDate"]),
    DisplayField::flag("Active", &["isActive"]),
    DisplayField::text("Photo", &["imagePath"]),
    DisplayField::text("Document", &["documentPath"]),
];

const REFERENCES: &[Reference] = &[
    Reference::new("departmentId", "Department", "department"),
    Reference::new("designationId", "Designation", "designation"),
];

impl Employee {
    /// Copy without the write-only password fields.
    pub fn without_secrets(mut self) -> Self {
        self.password.clear();
        self.confirm_password.clear();
        self
    }
}

impl Resource for Employee {
    const NAME: &'static str = "Employee";
    const PLURAL: &'static str = "Employees";
    const ID_FIELD: &'static str = "employeeId";
    const ROUTE: &'static str = "employees";
    const ELEMENT_NAME: &'static str = "Employee";
    const LIST_NAME: &'static str = "Employees";

    fn id(&self) -> Option<i64> {
        assigned(self.employee_id)
    }

    fn set_id(&mut self, id: i64) {
        self.employee_id = id;
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
        if self.id().is_none() && self.password.is_empty() {
            errors.add("password", "Password is required");
        }
        if !self.password.is_empty() && self.password.chars().count() < 6 {
            errors.add("password", "Password must be at least 6 characters");
        }
        if self.password != self.confirm_password {
            errors.add("confirmPassword", "Passwords do not match");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee() -> Employee {
        Employee {
            employee_name: "Karim".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_password_confirmation() {
        let mut errors = FieldErrors::new();
        employee().validate(&mut errors);
        assert!(errors.is_empty());

        let mut mismatched = employee();
        mismatched.confirm_password = "secret2".into();
        let mut errors = FieldErrors::new();
        mismatched.validate(&mut errors);
        assert_eq!(errors.get("confirmPassword"), Some("Passwords do not match"));
    }

    #[test]
    fn test_password_optional_on_update() {
        let mut existing = employee();
        existing.employee_id = 4;
        existing.password.clear();
        existing.confirm_password.clear();
        let mut errors = FieldErrors::new();
        existing.validate(&mut errors);
        assert!(errors.is_empty());

        existing.employee_id = 0;
        let mut errors = FieldErrors::new();
        existing.validate(&mut errors);
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn test_secrets_never_serialized_when_cleared() {
        let json = serde_json::to_value(employee().without_secrets()).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("confirmPassword").is_none());
    }
}
