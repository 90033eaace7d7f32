use serde::{Deserialize, Serialize};

use crate::domain::common::{assigned, Resource};
use crate::shared::display::DisplayField;
use crate::shared::lookup::LookupSource;
use crate::shared::metadata::FieldMetadata;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassRoom {
    pub class_room_id: i64,
    pub room_name: String,
    pub capacity: i64,
    pub has_projector: bool,
    pub location: Option<String>,
}

pub const LOOKUP: LookupSource =
    LookupSource::collection("/ClassRoom/GetClassRooms", "classRoomId", "roomName");

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("roomName", "Room Name")
        .required()
        .max_length(50),
    FieldMetadata::integer("capacity", "Capacity").required().min(1.0),
    FieldMetadata::checkbox("hasProjector", "Projector"),
    FieldMetadata::text("location", "Location").max_length(200),
];

const COLUMNS: &[DisplayField] = &[
    DisplayField::text("Room", &["roomName"]),
    DisplayField::number("Capacity", &["capacity"]),
    DisplayField::flag("Projector", &["hasProjector"]),
    DisplayField::text("Location", &["location"]),
];

impl Resource for ClassRoom {
    const NAME: &'static str = "ClassRoom";
    const PLURAL: &'static str = "ClassRooms";
    const ID_FIELD: &'static str = "classRoomId";
    const ROUTE: &'static str = "class-rooms";
    const ELEMENT_NAME: &'static str = "Class Room";
    const LIST_NAME: &'static str = "Class Rooms";

    fn id(&self) -> Option<i64> {
        assigned(self.class_room_id)
    }

    fn set_id(&mut self, id: i64) {
        self.class_room_id = id;
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
