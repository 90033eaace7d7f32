use serde::{Deserialize, Serialize};

use crate::domain::common::{assigned, Resource};
use crate::shared::display::DisplayField;
use crate::shared::format::parse_date;
use crate::shared::lookup::LookupSource;
use crate::shared::metadata::{FieldErrors, FieldMetadata};

/// Time-limited discount applied at admission
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Offer {
    pub offer_id: i64,
    pub offer_name: String,
    pub discount_percentage: f64,
    pub valid_from: String,
    pub valid_to: String,
    pub is_active: bool,
}

pub const LOOKUP: LookupSource = LookupSource::collection("/Offer/GetOffers", "offerId", "offerName");

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("offerName", "Offer Name")
        .required()
        .max_length(100),
    FieldMetadata::decimal("discountPercentage", "Discount %")
        .required()
        .min(0.0)
        .max(100.0),
    FieldMetadata::date("validFrom", "Valid From").required(),
    FieldMetadata::date("validTo", "Valid To").required(),
    FieldMetadata::checkbox("isActive", "Active"),
];

const COLUMNS: &[DisplayField] = &[
    DisplayField::text("Offer", &["offerName"]),
    DisplayField::percent("Discount", &["discountPercentage"]),
    DisplayField::date("From", &["validFrom"]),
    DisplayField::date("To", &["validTo"]),
    DisplayField::flag("Active", &["isActive"]),
];

impl Resource for Offer {
    const NAME: &'static str = "Offer";
    const PLURAL: &'static str = "Offers";
    const ID_FIELD: &'static str = "offerId";
    const ROUTE: &'static str = "offers";
    const ELEMENT_NAME: &'static str = "Offer";
    const LIST_NAME: &'static str = "Offers";

    fn id(&self) -> Option<i64> {
        assigned(self.offer_id)
    }

    fn set_id(&mut self, id: i64) {
        self.offer_id = id;
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

    fn validate(&self, errors: &mut FieldErrors) {
        if let (Some(from), Some(to)) = (parse_date(&self.valid_from), parse_date(&self.valid_to)) {
            if to < from {
                errors.add("validTo", "Valid To cannot be before Valid From");
            }
        }
    }
}
