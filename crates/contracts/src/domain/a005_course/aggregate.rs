use serde::{Deserialize, Serialize};

use crate::domain::common::{assigned, Resource};
use crate::shared::display::DisplayField;
use crate::shared::lookup::LookupSource;
use crate::shared::metadata::FieldMetadata;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Course {
    pub course_id: i64,
    pub course_name: String,
    pub course_code: String,
    pub total_hours: i64,
    pub course_fee: f64,
    pub description: Option<String>,
    pub is_active: bool,
}

pub const LOOKUP: LookupSource =
    LookupSource::collection("/Course/GetCourses", "courseId", "courseName");

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("courseName", "Course Name")
        .required()
        .max_length(150),
    FieldMetadata::text("courseCode", "Course Code")
        .required()
        .max_length(20),
    FieldMetadata::integer("totalHours", "Total Hours").required(),
    FieldMetadata::money("courseFee", "Course Fee").required(),
    FieldMetadata::textarea("description", "Description"),
    FieldMetadata::checkbox("isActive", "Active"),
];

const COLUMNS: &[DisplayField] = &[
    DisplayField::text("Code", &["courseCode"]),
    DisplayField::text("Course", &["courseName"]),
    DisplayField::number("Hours", &["totalHours"]),
    DisplayField::money("Fee", &["courseFee"]),
    DisplayField::flag("Active", &["isActive"]),
];

const DETAIL: &[DisplayField] = &[
    DisplayField::text("Code", &["courseCode"]),
    DisplayField::text("Course", &["courseName"]),
    DisplayField::number("Hours", &["totalHours"]),
    DisplayField::money("Fee", &["courseFee"]),
    DisplayField::text("Description", &["description"]),
    DisplayField::flag("Active", &["isActive"]),
];

impl Resource for Course {
    const NAME: &'static str = "Course";
    const PLURAL: &'static str = "Courses";
    const ID_FIELD: &'static str = "courseId";
    const ROUTE: &'static str = "courses";
    const ELEMENT_NAME: &'static str = "Course";
    const LIST_NAME: &'static str = "Courses";

    fn id(&self) -> Option<i64> {
        assigned(self.course_id)
    }

    fn set_id(&mut self, id: i64) {
        self.course_id = id;
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
}
