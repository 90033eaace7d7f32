pub mod common;

pub mod a001_department;
pub mod a002_designation;
pub mod a003_employee;
pub mod a004_instructor;
pub mod a005_course;
pub mod a006_course_combo;
pub mod a007_class_room;
pub mod a008_day;
pub mod a009_slot;
pub mod a010_batch;
pub mod a011_class_schedule;
pub mod a012_offer;
pub mod a013_visitor;
pub mod a014_registration;
pub mod a015_admission;
pub mod a016_trainee;
pub mod a017_batch_transfer;
pub mod a018_attendance;
pub mod a019_assessment;
pub mod a020_recommendation;
pub mod a021_certificate;
pub mod a022_money_receipt;
pub mod a023_daily_sales_record;

use common::ResourceInfo;

/// Invoke `$callback!` with the path of every entity type, in menu order.
///
/// ```rust,ignore
/// macro_rules! count { ($($t:ty),*) => { [$(stringify!($t)),*].len() } }
/// let n = contracts::with_resources!(count);
/// ```
#[macro_export]
macro_rules! with_resources {
    ($callback:ident) => {
        $callback! {
            $crate::domain::a001_department::Department,
            $crate::domain::a002_designation::Designation,
            $crate::domain::a003_employee::Employee,
            $crate::domain::a004_instructor::Instructor,
            $crate::domain::a005_course::Course,
            $crate::domain::a006_course_combo::CourseCombo,
            $crate::domain::a007_class_room::ClassRoom,
            $crate::domain::a008_day::Day,
            $crate::domain::a009_slot::Slot,
            $crate::domain::a010_batch::Batch,
            $crate::domain::a011_class_schedule::ClassSchedule,
            $crate::domain::a012_offer::Offer,
            $crate::domain::a013_visitor::Visitor,
            $crate::domain::a014_registration::Registration,
            $crate::domain::a015_admission::Admission,
            $crate::domain::a016_trainee::Trainee,
            $crate::domain::a017_batch_transfer::BatchTransfer,
            $crate::domain::a018_attendance::Attendance,
            $crate::domain::a019_assessment::Assessment,
            $crate::domain::a020_recommendation::Recommendation,
            $crate::domain::a021_certificate::Certificate,
            $crate::domain::a022_money_receipt::MoneyReceipt,
            $crate::domain::a023_daily_sales_record::DailySalesRecord
        }
    };
}

macro_rules! registry {
    ($($t:ty),*) => {
        &[$(ResourceInfo::of::<$t>()),*]
    };
}

/// Every entity, in menu order.
pub static RESOURCES: &[ResourceInfo] = with_resources!(registry);

/// Look up by controller name ("Batch").
pub fn resource_info(name: &str) -> Option<&'static ResourceInfo> {
    RESOURCES.iter().find(|r| r.name == name)
}

/// Look up by frontend route segment ("batches").
pub fn resource_by_route(route: &str) -> Option<&'static ResourceInfo> {
    RESOURCES.iter().find(|r| r.route == route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_and_routes_are_unique() {
        assert_eq!(RESOURCES.len(), 23);
        let names: HashSet<_> = RESOURCES.iter().map(|r| r.name).collect();
        let routes: HashSet<_> = RESOURCES.iter().map(|r| r.route).collect();
        assert_eq!(names.len(), RESOURCES.len());
        assert_eq!(routes.len(), RESOURCES.len());
    }

    #[test]
    fn test_references_point_at_known_entities() {
        for info in RESOURCES {
            for reference in (info.references)() {
                assert!(
                    resource_info(reference.entity).is_some(),
                    "{} references unknown {}",
                    info.name,
                    reference.entity
                );
            }
        }
    }

    macro_rules! route_table {
        ($($t:ty),*) => {
            fn routes() -> Vec<&'static str> {
                vec![$(<$t as common::Resource>::ROUTE),*]
            }
        };
    }

    with_resources!(route_table);

    #[test]
    fn test_callback_expands_to_items() {
        let expected: Vec<_> = RESOURCES.iter().map(|r| r.route).collect();
        assert_eq!(routes(), expected);
    }

    #[test]
    fn test_lookup_by_route() {
        let info = resource_by_route("money-receipts").unwrap();
        assert_eq!(info.paths().list(), "/MoneyReceipt/GetMoneyReceipts");
        assert_eq!(info.id_field, "moneyReceiptId");
    }
}
