use serde::{Deserialize, Serialize};

use crate::domain::a003_employee::aggregate::{self as employee, Employee};
use crate::domain::a005_course::aggregate::{self as course, Course};
use crate::domain::common::{assigned, Reference, Resource};
use crate::shared::derived::round_money;
use crate::shared::display::DisplayField;
use crate::shared::lookup::LookupSource;
use crate::shared::metadata::{DetailPanel, FieldMetadata};

pub const VISITOR_TYPES: &[&str] = &["Individual", "Organization"];

/// A prospect who walked in or called about a course
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Visitor {
    pub visitor_id: i64,
    pub visitor_name: String,
    pub contact_no: String,
    pub email: Option<String>,
    pub visitor_type: String,
    /// Only meaningful for `Organization` visitors.
    pub organization_name: Option<String>,
    pub course_id: i64,
    pub visit_date: Option<String>,
    /// Counsellor who met the visitor.
    pub employee_id: i64,
    pub remarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<Box<Course>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<Box<Employee>>,
}

/// Totals over a visitor's money receipts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisitorPaymentSummary {
    pub visitor_id: i64,
    pub visitor_name: String,
    pub total_payable: f64,
    pub total_paid: f64,
    pub total_due: f64,
    pub receipt_count: i64,
}

impl VisitorPaymentSummary {
    /// Sum `(payable, paid)` pairs.
    pub fn from_receipts<I>(visitor: &Visitor, receipts: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut summary = Self {
            visitor_id: visitor.visitor_id,
            visitor_name: visitor.visitor_name.clone(),
            ..Default::default()
        };
        for (payable, paid) in receipts {
            summary.total_payable += payable;
            summary.total_paid += paid;
            summary.receipt_count += 1;
        }
        summary.total_payable = round_money(summary.total_payable);
        summary.total_paid = round_money(summary.total_paid);
        summary.total_due = round_money(summary.total_payable - summary.total_paid);
        summary
    }
}

pub const LOOKUP: LookupSource =
    LookupSource::collection("/Visitor/GetVisitors", "visitorId", "visitorName");

pub const PAYMENT_SUMMARY_PATH: &str = "/Visitor/GetVisitorPaymentSummary";

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("visitorName", "Visitor Name")
        .required()
        .max_length(100),
    FieldMetadata::phone("contactNo", "Contact No").required(),
    FieldMetadata::email("email", "Email"),
    FieldMetadata::choice("visitorType", "Visitor Type", VISITOR_TYPES).required(),
    FieldMetadata::text("organizationName", "Organization")
        .required()
        .max_length(150)
        .visible_when("visitorType", "Organization"),
    FieldMetadata::lookup("courseId", "Interested Course", course::LOOKUP),
    FieldMetadata::date("visitDate", "Visit Date"),
    FieldMetadata::lookup("employeeId", "Counsellor", employee::LOOKUP),
    FieldMetadata::textarea("remarks", "Remarks"),
];

const COLUMNS: &[DisplayField] = &[
    DisplayField::text("Name", &["visitorName"]),
    DisplayField::text("Contact", &["contactNo"]),
    DisplayField::text("Email", &["email"]),
    DisplayField::text("Type", &["visitorType"]),
    DisplayField::text("Course", &["course", "courseName"]),
    DisplayField::date("Visited", &["visitDate"]),
];

const DETAIL: &[DisplayField] = &[
    DisplayField::text("Name", &["visitorName"]),
    DisplayField::text("Contact", &["contactNo"]),
    DisplayField::text("Email", &["email"]),
    DisplayField::text("Type", &["visitorType"]),
    DisplayField::text("Organization", &["organizationName"]),
    DisplayField::text("Interested Course", &["course", "courseName"]),
    DisplayField::date("Visit Date", &["visitDate"]),
    DisplayField::text("Counsellor", &["employee", "employeeName"]),
    DisplayField::text("Remarks", &["remarks"]),
];

const PANELS: &[DetailPanel] = &[DetailPanel {
    title: "Payment Summary",
    path: PAYMENT_SUMMARY_PATH,
    fields: &[
        DisplayField::number("Receipts", &["receiptCount"]),
        DisplayField::money("Total Payable", &["totalPayable"]),
        DisplayField::money("Total Paid", &["totalPaid"]),
        DisplayField::payment_status("Status", &["totalDue"]),
    ],
}];

const REFERENCES: &[Reference] = &[
    Reference::new("courseId", "Course", "course"),
    Reference::new("employeeId", "Employee", "employee"),
];

impl Resource for Visitor {
    const NAME: &'static str = "Visitor";
    const PLURAL: &'static str = "Visitors";
    const ID_FIELD: &'static str = "visitorId";
    const ROUTE: &'static str = "visitors";
    const ELEMENT_NAME: &'static str = "Visitor";
    const LIST_NAME: &'static str = "Visitors";

    fn id(&self) -> Option<i64> {
        assigned(self.visitor_id)
    }

    fn set_id(&mut self, id: i64) {
        self.visitor_id = id;
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

    fn detail_panels() -> &'static [DetailPanel] {
        PANELS
    }

    fn references() -> &'static [Reference] {
        REFERENCES
    }

    /// Organization name is dropped for individual visitors.
    fn recompute_derived(&mut self) {
        if self.visitor_type != "Organization" {
            self.organization_name = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payment_summary_totals() {
        let visitor = Visitor {
            visitor_id: 3,
            visitor_name: "Jane Doe".into(),
            ..Default::default()
        };
        let summary = VisitorPaymentSummary::from_receipts(&visitor, [(500.0, 200.0), (1000.0, 1000.0)]);
        assert_eq!(summary.receipt_count, 2);
        assert_eq!(summary.total_payable, 1500.0);
        assert_eq!(summary.total_paid, 1200.0);
        assert_eq!(summary.total_due, 300.0);
    }

    #[test]
    fn test_summary_panel_renders_status() {
        let summary = json!({"receiptCount": 1, "totalPayable": 500.0, "totalPaid": 200.0, "totalDue": 300.0});
        let rendered: Vec<String> = PANELS[0].fields.iter().map(|f| f.render(&summary)).collect();
        assert_eq!(rendered, vec!["1", "500.00", "200.00", "Due (300.00)"]);
        assert_eq!(PANELS[0].url(3), "/Visitor/GetVisitorPaymentSummary/3");
    }

    #[test]
    fn test_individual_drops_organization() {
        let mut visitor = Visitor {
            visitor_type: "Individual".into(),
            organization_name: Some("Acme".into()),
            ..Default::default()
        };
        visitor.recompute_derived();
        assert_eq!(visitor.organization_name, None);
    }
}
