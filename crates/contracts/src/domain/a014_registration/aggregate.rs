use serde::{Deserialize, Serialize};

use crate::domain::a013_visitor::aggregate::{self as visitor, Visitor};
use crate::domain::common::{assigned, Reference, Resource};
use crate::shared::display::DisplayField;
use crate::shared::lookup::LookupSource;
use crate::shared::metadata::FieldMetadata;

pub const GENDERS: &[&str] = &["Male", "Female", "Other"];

/// Personal record of a visitor who signed up
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Registration {
    pub registration_id: i64,
    pub visitor_id: i64,
    pub trainee_name: String,
    pub email: Option<String>,
    pub contact_no: String,
    pub gender: String,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    pub registration_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visitor: Option<Box<Visitor>>,
}

pub const LOOKUP: LookupSource = LookupSource::collection(
    "/Registration/GetRegistrations",
    "registrationId",
    "traineeName",
);

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::lookup("visitorId", "Visitor", visitor::LOOKUP).required(),
    FieldMetadata::text("traineeName", "Trainee Name")
        .required()
        .max_length(100),
    FieldMetadata::email("email", "Email"),
    FieldMetadata::phone("contactNo", "Contact No").required(),
    FieldMetadata::choice("gender", "Gender", GENDERS).required(),
    FieldMetadata::date("dateOfBirth", "Date of Birth"),
    FieldMetadata::textarea("address", "Address"),
    FieldMetadata::date("registrationDate", "Registration Date").required(),
];

const COLUMNS: &[DisplayField] = &[
    DisplayField::text("Trainee", &["traineeName"]),
    DisplayField::text("Contact", &["contactNo"]),
    DisplayField::text("Gender", &["gender"]),
    DisplayField::text("Visitor", &["visitor", "visitorName"]),
    DisplayField::date("Registered", &["registrationDate"]),
];

const DETAIL: &[DisplayField] = &[
    DisplayField::text("Trainee", &["traineeName"]),
    DisplayField::text("Email", &["email"]),
    DisplayField::text("Contact", &["contactNo"]),
    DisplayField::text("Gender", &["gender"]),
    DisplayField::date("Date of Birth", &["dateOfBirth"]),
    DisplayField::text("Address", &["address"]),
    DisplayField::date("Registered", &["registrationDate"]),
    DisplayField::text("Visitor", &["visitor", "visitorName"]),
    DisplayField::text("Interested Course", &["visitor", "course", "courseName"]),
];

const REFERENCES: &[Reference] = &[Reference::new("visitorId", "Visitor", "visitor")];

impl Resource for Registration {
    const NAME: &'static str = "Registration";
    const PLURAL: &'static str = "Registrations";
    const ID_FIELD: &'static str = "registrationId";
    const ROUTE: &'static str = "registrations";
    const ELEMENT_NAME: &'static str = "Registration";
    const LIST_NAME: &'static str = "Registrations";

    fn id(&self) -> Option<i64> {
        assigned(self.registration_id)
    }

    fn set_id(&mut self, id: i64) {
        self.registration_id = id;
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
