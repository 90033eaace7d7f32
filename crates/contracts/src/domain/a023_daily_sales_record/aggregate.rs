use serde::{Deserialize, Serialize};

use crate::domain::a003_employee::aggregate::{self as employee, Employee};
use crate::domain::common::{assigned, Reference, Resource};
use crate::shared::display::DisplayField;
use crate::shared::metadata::FieldMetadata;

/// One counsellor's sales activity for a day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailySalesRecord {
    pub daily_sales_record_id: i64,
    pub employee_id: i64,
    pub record_date: String,
    pub calls_made: i64,
    pub visitors_met: i64,
    pub admissions_closed: i64,
    pub sales_amount: f64,
    pub remarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<Box<Employee>>,
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::lookup("employeeId", "Employee", employee::LOOKUP).required(),
    FieldMetadata::date("recordDate", "Date").required(),
    FieldMetadata::integer("callsMade", "Calls Made"),
    FieldMetadata::integer("visitorsMet", "Visitors Met"),
    FieldMetadata::integer("admissionsClosed", "Admissions Closed"),
    FieldMetadata::money("salesAmount", "Sales Amount"),
    FieldMetadata::textarea("remarks", "Remarks"),
];

const COLUMNS: &[DisplayField] = &[
    DisplayField::date("Date", &["recordDate"]),
    DisplayField::text("Employee", &["employee", "employeeName"]),
    DisplayField::number("Calls", &["callsMade"]),
    DisplayField::number("Visitors", &["visitorsMet"]),
    DisplayField::number("Admissions", &["admissionsClosed"]),
    DisplayField::money("Sales", &["salesAmount"]),
];

const DETAIL: &[DisplayField] = &[
    DisplayField::date("Date", &["recordDate"]),
    DisplayField::text("Employee", &["employee", "employeeName"]),
    DisplayField::text("Department", &["employee", "department", "departmentName"]),
    DisplayField::number("Calls Made", &["callsMade"]),
    DisplayField::number("Visitors Met", &["visitorsMet"]),
    DisplayField::number("Admissions Closed", &["admissionsClosed"]),
    DisplayField::money("Sales Amount", &["salesAmount"]),
    DisplayField::text("Remarks", &["remarks"]),
];

const REFERENCES: &[Reference] = &[Reference::new("employeeId", "Employee", "employee")];

impl Resource for DailySalesRecord {
    const NAME: &'static str = "DailySalesRecord";
    const PLURAL: &'static str = "DailySalesRecords";
    const ID_FIELD: &'static str = "dailySalesRecordId";
    const ROUTE: &'static str = "daily-sales";
    const ELEMENT_NAME: &'static str = "Daily Sales Record";
    const LIST_NAME: &'static str = "Daily Sales";

    fn id(&self) -> Option<i64> {
        assigned(self.daily_sales_record_id)
    }

    fn set_id(&mut self, id: i64) {
        self.daily_sales_record_id = id;
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
