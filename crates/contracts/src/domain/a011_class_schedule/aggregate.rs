use serde::{Deserialize, Serialize};

use crate::domain::a007_class_room::aggregate::{self as class_room, ClassRoom};
use crate::domain::a008_day::aggregate::{self as day, Day};
use crate::domain::a009_slot::aggregate::{self as slot, Slot};
use crate::domain::a010_batch::aggregate::{self as batch, Batch};
use crate::domain::common::{assigned, Reference, Resource};
use crate::shared::display::DisplayField;
use crate::shared::metadata::FieldMetadata;

/// Weekly occurrence of a batch: day, slot and room
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassSchedule {
    pub class_schedule_id: i64,
    pub batch_id: i64,
    pub day_id: i64,
    pub slot_id: i64,
    pub class_room_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<Box<Batch>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<Box<Day>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<Box<Slot>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_room: Option<Box<ClassRoom>>,
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::lookup("batchId", "Batch", batch::LOOKUP).required(),
    FieldMetadata::lookup("dayId", "Day", day::LOOKUP).required(),
    FieldMetadata::lookup("slotId", "Slot", slot::LOOKUP).required(),
    FieldMetadata::lookup("classRoomId", "Class Room", class_room::LOOKUP).required(),
];

const COLUMNS: &[DisplayField] = &[
    DisplayField::text("Batch", &["batch", "batchName"]),
    DisplayField::text("Day", &["day", "dayName"]),
    DisplayField::text("Slot", &["slot", "slotName"]),
    DisplayField::text("Start", &["slot", "startTime"]),
    DisplayField::text("End", &["slot", "endTime"]),
    DisplayField::text("Room", &["classRoom", "roomName"]),
];

const REFERENCES: &[Reference] = &[
    Reference::new("batchId", "Batch", "batch"),
    Reference::new("dayId", "Day", "day"),
    Reference::new("slotId", "Slot", "slot"),
    Reference::new("classRoomId", "ClassRoom", "classRoom"),
];

impl Resource for ClassSchedule {
    const NAME: &'static str = "ClassSchedule";
    const PLURAL: &'static str = "ClassSchedules";
    const ID_FIELD: &'static str = "classScheduleId";
    const ROUTE: &'static str = "class-schedules";
    const ELEMENT_NAME: &'static str = "Class Schedule";
    const LIST_NAME: &'static str = "Class Schedules";

    fn id(&self) -> Option<i64> {
        assigned(self.class_schedule_id)
    }

    fn set_id(&mut self, id: i64) {
        self.class_schedule_id = id;
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
