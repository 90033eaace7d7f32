use serde::{Deserialize, Serialize};

use crate::domain::a013_visitor::aggregate::{self as visitor, Visitor};
use crate::domain::a015_admission::aggregate as admission;
use crate::domain::common::{assigned, Reference, Resource};
use crate::shared::derived::due_amount;
use crate::shared::display::DisplayField;
use crate::shared::metadata::FieldMetadata;

pub const CATEGORIES: &[&str] = &["Admission", "Other"];
pub const PAYMENT_MODES: &[&str] = &["Cash", "Card", "Mobile Banking", "Bank Transfer"];

/// Payment taken from a visitor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MoneyReceipt {
    pub money_receipt_id: i64,
    pub visitor_id: i64,
    pub category: String,
    /// Set only for `Admission` receipts.
    pub admission_id: i64,
    pub receipt_date: String,
    pub payable_amount: f64,
    pub paid_amount: f64,
    /// `payable - paid`; negative when overpaid.
    pub due_amount: f64,
    pub payment_mode: String,
    pub remarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visitor: Option<Box<Visitor>>,
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::lookup("visitorId", "Visitor", visitor::LOOKUP).required(),
    FieldMetadata::choice("category", "Category", CATEGORIES).required(),
    FieldMetadata::lookup("admissionId", "Admission", admission::LOOKUP)
        .required()
        .visible_when("category", "Admission"),
    FieldMetadata::date("receiptDate", "Receipt Date").required(),
    FieldMetadata::money("payableAmount", "Payable").required(),
    FieldMetadata::money("paidAmount", "Paid").required(),
    FieldMetadata::money("dueAmount", "Due").derived(),
    FieldMetadata::choice("paymentMode", "Payment Mode", PAYMENT_MODES).required(),
    FieldMetadata::textarea("remarks", "Remarks"),
];

const COLUMNS: &[DisplayField] = &[
    DisplayField::text("Receipt", &["moneyReceiptId"]),
    DisplayField::text("Visitor", &["visitor", "visitorName"]),
    DisplayField::text("Category", &["category"]),
    DisplayField::date("Date", &["receiptDate"]),
    DisplayField::money("Paid", &["paidAmount"]),
    DisplayField::payment_status("Due", &["dueAmount"]),
];

const DETAIL: &[DisplayField] = &[
    DisplayField::text("Receipt", &["moneyReceiptId"]),
    DisplayField::text("Visitor", &["visitor", "visitorName"]),
    DisplayField::text("Contact", &["visitor", "contactNo"]),
    DisplayField::text("Category", &["category"]),
    DisplayField::date("Date", &["receiptDate"]),
    DisplayField::money("Payable", &["payableAmount"]),
    DisplayField::money("Paid", &["paidAmount"]),
    DisplayField::payment_status("Due", &["dueAmount"]),
    DisplayField::text("Payment Mode", &["paymentMode"]),
    DisplayField::text("Remarks", &["remarks"]),
];

const REFERENCES: &[Reference] = &[Reference::new("visitorId", "Visitor", "visitor")];

impl Resource for MoneyReceipt {
    const NAME: &'static str = "MoneyReceipt";
    const PLURAL: &'static str = "MoneyReceipts";
    const ID_FIELD: &'static str = "moneyReceiptId";
    const ROUTE: &'static str = "money-receipts";
    const ELEMENT_NAME: &'static str = "Money Receipt";
    const LIST_NAME: &'static str = "Money Receipts";

    fn id(&self) -> Option<i64> {
        assigned(self.money_receipt_id)
    }

    fn set_id(&mut self, id: i64) {
        self.money_receipt_id = id;
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
        self.due_amount = due_amount(self.payable_amount, self.paid_amount);
        if self.category != "Admission" {
            self.admission_id = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::derived::PaymentStatus;

    #[test]
    fn test_due_and_status() {
        let mut receipt = MoneyReceipt {
            category: "Other".into(),
            payable_amount: 500.0,
            paid_amount: 200.0,
            ..Default::default()
        };
        receipt.recompute_derived();
        assert_eq!(receipt.due_amount, 300.0);
        assert_eq!(PaymentStatus::of(receipt.due_amount), PaymentStatus::Due);

        receipt.paid_amount = 650.0;
        receipt.recompute_derived();
        assert_eq!(receipt.due_amount, -150.0);
        assert_eq!(PaymentStatus::of(receipt.due_amount), PaymentStatus::Overpaid);
    }

    #[test]
    fn test_admission_link_only_for_admission_category() {
        let mut receipt = MoneyReceipt {
            category: "Other".into(),
            admission_id: 4,
            ..Default::default()
        };
        receipt.recompute_derived();
        assert_eq!(receipt.admission_id, 0);
    }
}
