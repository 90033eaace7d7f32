use serde::{Deserialize, Serialize};

use crate::domain::a004_instructor::aggregate::{self as instructor, Instructor};
use crate::domain::a010_batch::aggregate::{self as batch, Batch};
use crate::domain::a016_trainee::aggregate::Trainee;
use crate::domain::common::{assigned, Reference, Resource};
use crate::shared::derived::{attendance_percentage, overall_score};
use crate::shared::display::DisplayField;
use crate::shared::lookup::LookupSource;
use crate::shared::metadata::{FieldErrors, FieldMetadata};

/// Scores of one trainee at the end of a batch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Assessment {
    pub assessment_id: i64,
    pub batch_id: i64,
    pub trainee_id: i64,
    /// The batch's instructor, filled from the batch context.
    pub instructor_id: i64,
    pub assessment_date: String,
    pub theoretical_score: f64,
    pub practical_score: f64,
    pub overall_score: f64,
    pub days_present: i64,
    pub total_days: i64,
    pub attendance_percentage: Option<f64>,
    pub remarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainee: Option<Box<Trainee>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<Box<Batch>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<Box<Instructor>>,
}

pub const CONTEXT_ACTION: &str = "GetBatchAssessmentContext";

/// Trainees of the batch without an assessment yet.
pub const ELIGIBLE_TRAINEES: LookupSource = LookupSource::scoped(
    "batchId",
    "/Assessment/GetBatchAssessmentContext",
    "traineeId",
    "traineeName",
)
.items("trainees")
.autofill(&[("instructorId", "instructorId")]);

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::lookup("batchId", "Batch", batch::LOOKUP).required(),
    FieldMetadata::lookup("traineeId", "Trainee", ELIGIBLE_TRAINEES).required(),
    FieldMetadata::lookup("instructorId", "Instructor", instructor::LOOKUP)
        .required()
        .read_only(),
    FieldMetadata::date("assessmentDate", "Assessment Date").required(),
    FieldMetadata::decimal("theoreticalScore", "Theoretical Score")
        .required()
        .min(0.0)
        .max(100.0),
    FieldMetadata::decimal("practicalScore", "Practical Score")
        .required()
        .min(0.0)
        .max(100.0),
    FieldMetadata::decimal("overallScore", "Overall Score").derived(),
    FieldMetadata::integer("daysPresent", "Days Present").required(),
    FieldMetadata::integer("totalDays", "Total Days").required().min(1.0),
    FieldMetadata::decimal("attendancePercentage", "Attendance %").derived(),
    FieldMetadata::textarea("remarks", "Remarks"),
];

const COLUMNS: &[DisplayField] = &[
    DisplayField::text("Trainee", &["trainee", "registration", "traineeName"]),
    DisplayField::text("Batch", &["batch", "batchName"]),
    DisplayField::date("Date", &["assessmentDate"]),
    DisplayField::number("Overall", &["overallScore"]),
    DisplayField::percent("Attendance", &["attendancePercentage"]),
];

const DETAIL: &[DisplayField] = &[
    DisplayField::text("Trainee", &["trainee", "registration", "traineeName"]),
    DisplayField::text("Batch", &["batch", "batchName"]),
    DisplayField::text("Instructor", &["instructor", "instructorName"]),
    DisplayField::date("Assessment Date", &["assessmentDate"]),
    DisplayField::number("Theoretical", &["theoreticalScore"]),
    DisplayField::number("Practical", &["practicalScore"]),
    DisplayField::number("Overall", &["overallScore"]),
    DisplayField::number("Days Present", &["daysPresent"]),
    DisplayField::number("Total Days", &["totalDays"]),
    DisplayField::percent("Attendance", &["attendancePercentage"]),
    DisplayField::text("Remarks", &["remarks"]),
];

const REFERENCES: &[Reference] = &[
    Reference::new("traineeId", "Trainee", "trainee"),
    Reference::new("batchId", "Batch", "batch"),
    Reference::new("instructorId", "Instructor", "instructor"),
];

impl Resource for Assessment {
    const NAME: &'static str = "Assessment";
    const PLURAL: &'static str = "Assessments";
    const ID_FIELD: &'static str = "assessmentId";
    const ROUTE: &'static str = "assessments";
    const ELEMENT_NAME: &'static str = "Assessment";
    const LIST_NAME: &'static str = "Assessments";

    fn id(&self) -> Option<i64> {
        assigned(self.assessment_id)
    }

    fn set_id(&mut self, id: i64) {
        self.assessment_id = id;
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

    fn recompute_derived(&mut self) {
        self.overall_score = overall_score(self.theoretical_score, self.practical_score);
        self.attendance_percentage =
            attendance_percentage(self.days_present as f64, self.total_days as f64);
    }

    fn validate(&self, errors: &mut FieldErrors) {
        if self.days_present > self.total_days {
            errors.add("daysPresent", "Days Present cannot exceed Total Days");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_scores() {
        let mut assessment = Assessment {
            theoretical_score: 70.0,
            practical_score: 90.0,
            days_present: 8,
            total_days: 10,
            ..Default::default()
        };
        assessment.recompute_derived();
        assert_eq!(assessment.overall_score, 80.0);
        assert_eq!(assessment.attendance_percentage, Some(80.0));
    }

    #[test]
    fn test_no_days_means_no_percentage() {
        let mut assessment = Assessment::default();
        assessment.recompute_derived();
        assert_eq!(assessment.attendance_percentage, None);
    }

    #[test]
    fn test_days_present_bound() {
        let assessment = Assessment {
            days_present: 11,
            total_days: 10,
            ..Default::default()
        };
        let mut errors = FieldErrors::new();
        assessment.validate(&mut errors);
        assert!(errors.get("daysPresent").is_some());
    }
}
