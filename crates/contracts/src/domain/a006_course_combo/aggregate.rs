use serde::{Deserialize, Serialize};

use crate::domain::common::{assigned, Resource};
use crate::shared::display::DisplayField;
use crate::shared::lookup::LookupSource;
use crate::shared::metadata::FieldMetadata;

/// Several courses sold together at a combined fee
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseCombo {
    pub course_combo_id: i64,
    pub combo_name: String,
    /// Comma separated course ids, as the backend stores them.
    pub course_ids: String,
    pub combo_fee: f64,
    pub is_active: bool,
}

impl CourseCombo {
    pub fn course_id_list(&self) -> Vec<i64> {
        self.course_ids
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect()
    }
}

pub const LOOKUP: LookupSource =
    LookupSource::collection("/CourseCombo/GetCourseCombos", "courseComboId", "comboName");

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("comboName", "Combo Name")
        .required()
        .max_length(150),
    FieldMetadata::text("courseIds", "Course Ids")
        .required()
        .placeholder("1,2,3"),
    FieldMetadata::money("comboFee", "Combo Fee").required(),
    FieldMetadata::checkbox("isActive", "Active"),
];

const COLUMNS: &[DisplayField] = &[
    DisplayField::text("Combo", &["comboName"]),
    DisplayField::text("Courses", &["courseIds"]),
    DisplayField::money("Fee", &["comboFee"]),
    DisplayField::flag("Active", &["isActive"]),
];

impl Resource for CourseCombo {
    const NAME: &'static str = "CourseCombo";
    const PLURAL: &'static str = "CourseCombos";
    const ID_FIELD: &'static str = "courseComboId";
    const ROUTE: &'static str = "course-combos";
    const ELEMENT_NAME: &'static str = "Course Combo";
    const LIST_NAME: &'static str = "Course Combos";

    fn id(&self) -> Option<i64> {
        assigned(self.course_combo_id)
    }

    fn set_id(&mut self, id: i64) {
        self.course_combo_id = id;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_id_list_skips_garbage() {
        let combo = CourseCombo {
            course_ids: "1, 2,x,,5".into(),
            ..Default::default()
        };
        assert_eq!(combo.course_id_list(), vec![1, 2, 5]);
    }
}
