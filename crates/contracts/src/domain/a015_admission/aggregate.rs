use serde::{Deserialize, Serialize};

use crate::domain::a005_course::aggregate::{self as course, Course};
use crate::domain::a006_course_combo::aggregate as course_combo;
use crate::domain::a010_batch::aggregate::{self as batch, Batch};
use crate::domain::a012_offer::aggregate::{self as offer, Offer};
use crate::domain::a013_visitor::aggregate::{self as visitor, Visitor};
use crate::domain::a014_registration::aggregate as registration;
use crate::domain::common::{assigned, Reference, Resource};
use crate::shared::derived::payable_after_discount;
use crate::shared::display::DisplayField;
use crate::shared::lookup::LookupSource;
use crate::shared::metadata::{FieldErrors, FieldMetadata};

/// Enrolment of a registered visitor into a batch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Admission {
    pub admission_id: i64,
    pub visitor_id: i64,
    pub registration_id: i64,
    pub course_id: i64,
    /// 0 when the admission is for a single course.
    pub course_combo_id: i64,
    pub batch_id: i64,
    pub offer_id: i64,
    pub admission_date: String,
    pub total_fee: f64,
    pub discount_amount: f64,
    /// `total_fee - discount_amount`, never negative.
    pub payable_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visitor: Option<Box<Visitor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<Box<Course>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<Box<Batch>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer: Option<Box<Offer>>,
}

pub const LOOKUP: LookupSource = LookupSource::collection(
    "/Admission/GetAdmissions",
    "admissionId",
    "visitor.visitorName",
);

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::lookup("visitorId", "Visitor", visitor::LOOKUP).required(),
    FieldMetadata::lookup("registrationId", "Registration", registration::LOOKUP).required(),
    FieldMetadata::lookup("courseId", "Course", course::LOOKUP).required(),
    FieldMetadata::lookup("courseComboId", "Course Combo", course_combo::LOOKUP),
    FieldMetadata::lookup("batchId", "Batch", batch::LOOKUP).required(),
    FieldMetadata::lookup("offerId", "Offer", offer::LOOKUP),
    FieldMetadata::date("admissionDate", "Admission Date").required(),
    FieldMetadata::money("totalFee", "Total Fee").required(),
    FieldMetadata::money("discountAmount", "Discount"),
    FieldMetadata::money("payableAmount", "Payable").derived(),
];

const COLUMNS: &[DisplayField] = &[
    DisplayField::text("Visitor", &["visitor", "visitorName"]),
    DisplayField::text("Course", &["course", "courseName"]),
    DisplayField::text("Batch", &["batch", "batchName"]),
    DisplayField::date("Admitted", &["admissionDate"]),
    DisplayField::money("Payable", &["payableAmount"]),
];

const DETAIL: &[DisplayField] = &[
    DisplayField::text("Visitor", &["visitor", "visitorName"]),
    DisplayField::text("Contact", &["visitor", "contactNo"]),
    DisplayField::text("Course", &["course", "courseName"]),
    DisplayField::text("Batch", &["batch", "batchName"]),
    DisplayField::text("Offer", &["offer", "offerName"]),
    DisplayField::date("Admission Date", &["admissionDate"]),
    DisplayField::money("Total Fee", &["totalFee"]),
    DisplayField::money("Discount", &["discountAmount"]),
    DisplayField::money("Payable", &["payableAmount"]),
];

const REFERENCES: &[Reference] = &[
    Reference::new("visitorId", "Visitor", "visitor"),
    Reference::new("courseId", "Course", "course"),
    Reference::new("batchId", "Batch", "batch"),
    Reference::new("offerId", "Offer", "offer"),
];

impl Resource for Admission {
    const NAME: &'static str = "Admission";
    const PLURAL: &'static str = "Admissions";
    const ID_FIELD: &'static str = "admissionId";
    const ROUTE: &'static str = "admissions";
    const ELEMENT_NAME: &'static str = "Admission";
    const LIST_NAME: &'static str = "Admissions";

    fn id(&self) -> Option<i64> {
        assigned(self.admission_id)
    }

    fn set_id(&mut self, id: i64) {
        self.admission_id = id;
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
        self.payable_amount = payable_after_discount(self.total_fee, self.discount_amount);
    }

    fn validate(&self, errors: &mut FieldErrors) {
        if self.discount_amount > self.total_fee {
            errors.add("discountAmount", "Discount cannot exceed the Total Fee");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payable_after_discount() {
        let mut admission = Admission {
            total_fee: 12000.0,
            discount_amount: 1500.0,
            ..Default::default()
        };
        admission.recompute_derived();
        assert_eq!(admission.payable_amount, 10500.0);
        admission.recompute_derived();
        assert_eq!(admission.payable_amount, 10500.0);
    }

    #[test]
    fn test_discount_over_fee_rejected() {
        let admission = Admission {
            total_fee: 100.0,
            discount_amount: 150.0,
            ..Default::default()
        };
        let mut errors = FieldErrors::new();
        admission.validate(&mut errors);
        assert!(errors.get("discountAmount").is_some());
    }
}
