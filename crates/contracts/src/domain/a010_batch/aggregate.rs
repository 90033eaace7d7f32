use serde::{Deserialize, Serialize};

use crate::domain::a004_instructor::aggregate::{self as instructor, Instructor};
use crate::domain::a005_course::aggregate::{self as course, Course};
use crate::domain::a007_class_room::aggregate::{self as class_room, ClassRoom};
use crate::domain::common::{assigned, Reference, Resource};
use crate::shared::display::DisplayField;
use crate::shared::format::parse_date;
use crate::shared::lookup::LookupSource;
use crate::shared::metadata::{FieldErrors, FieldMetadata};

/// A cohort of trainees taking one course with one instructor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Batch {
    pub batch_id: i64,
    pub batch_name: String,
    pub course_id: i64,
    pub instructor_id: i64,
    pub class_room_id: i64,
    pub start_date: String,
    pub end_date: Option<String>,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<Box<Course>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<Box<Instructor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_room: Option<Box<ClassRoom>>,
}

pub const LOOKUP: LookupSource = LookupSource::collection("/Batch/GetBatches", "batchId", "batchName");

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("batchName", "Batch Name")
        .required()
        .max_length(100),
    FieldMetadata::lookup("courseId", "Course", course::LOOKUP).required(),
    FieldMetadata::lookup("instructorId", "Instructor", instructor::LOOKUP).required(),
    FieldMetadata::lookup("classRoomId", "Class Room", class_room::LOOKUP).required(),
    FieldMetadata::date("startDate", "Start Date").required(),
    FieldMetadata::date("endDate", "End Date"),
    FieldMetadata::checkbox("isActive", "Active"),
];

const COLUMNS: &[DisplayField] = &[
    DisplayField::text("Batch", &["batchName"]),
    DisplayField::text("Course", &["course", "courseName"]),
    DisplayField::text("Instructor", &["instructor", "instructorName"]),
    DisplayField::date("Start", &["startDate"]),
    DisplayField::flag("Active", &["isActive"]),
];

const DETAIL: &[DisplayField] = &[
    DisplayField::text("Batch", &["batchName"]),
    DisplayField::text("Course", &["course", "courseName"]),
    DisplayField::text("Instructor", &["instructor", "instructorName"]),
    DisplayField::text("Class Room", &["classRoom", "roomName"]),
    DisplayField::date("Start Date", &["startDate"]),
    DisplayField::date("End Date", &["endDate"]),
    DisplayField::flag("Active", &["isActive"]),
];

const REFERENCES: &[Reference] = &[
    Reference::new("courseId", "Course", "course"),
    Reference::new("instructorId", "Instructor", "instructor"),
    Reference::new("classRoomId", "ClassRoom", "classRoom"),
];

impl Resource for Batch {
    const NAME: &'static str = "Batch";
    const PLURAL: &'static str = "Batches";
    const ID_FIELD: &'static str = "batchId";
    const ROUTE: &'static str = "batches";
    const ELEMENT_NAME: &'static str = "Batch";
    const LIST_NAME: &'static str = "Batches";

    fn id(&self) -> Option<i64> {
        assigned(self.batch_id)
    }

    fn set_id(&mut self, id: i64) {
        self.batch_id = id;
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
        let start = parse_date(&self.start_date);
        let end = self.end_date.as_deref().and_then(parse_date);
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                errors.add("endDate", "End Date cannot be before Start Date");
            }
        }
    }
}
