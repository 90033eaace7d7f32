//! Per-entity wiring of the generic CRUD pages.
//!
//! Every entity uses [`ResourceClient`] except Employee, whose controller
//! wraps responses in an envelope and takes multipart bodies.

pub mod a003_employee;

use contracts::domain::a001_department::Department;
use contracts::domain::a002_designation::Designation;
use contracts::domain::a003_employee::Employee;
use contracts::domain::a004_instructor::Instructor;
use contracts::domain::a005_course::Course;
use contracts::domain::a006_course_combo::CourseCombo;
use contracts::domain::a007_class_room::ClassRoom;
use contracts::domain::a008_day::Day;
use contracts::domain::a009_slot::Slot;
use contracts::domain::a010_batch::Batch;
use contracts::domain::a011_class_schedule::ClassSchedule;
use contracts::domain::a012_offer::Offer;
use contracts::domain::a013_visitor::Visitor;
use contracts::domain::a014_registration::Registration;
use contracts::domain::a015_admission::Admission;
use contracts::domain::a016_trainee::Trainee;
use contracts::domain::a017_batch_transfer::BatchTransfer;
use contracts::domain::a018_attendance::Attendance;
use contracts::domain::a019_assessment::Assessment;
use contracts::domain::a020_recommendation::Recommendation;
use contracts::domain::a021_certificate::Certificate;
use contracts::domain::a022_money_receipt::MoneyReceipt;
use contracts::domain::a023_daily_sales_record::DailySalesRecord;
use contracts::domain::common::Resource;
use leptos::prelude::AnyView;

use crate::shared::crud::detail::entity_detail_page;
use crate::shared::crud::form::entity_form_page;
use crate::shared::crud::list::entity_list_page;
use crate::shared::crud::{CrudService, ResourceClient};
use a003_employee::service::EmployeeService;

/// An entity with a UI: its descriptor plus the service that talks to its
/// controller.
pub trait CrudPage: Resource {
    type Service: CrudService<Self>;
}

macro_rules! resource_client_pages {
    ($($t:ty),* $(,)?) => {
        $(impl CrudPage for $t {
            type Service = ResourceClient<$t>;
        })*
    };
}

resource_client_pages!(
    Department,
    Designation,
    Instructor,
    Course,
    CourseCombo,
    ClassRoom,
    Day,
    Slot,
    Batch,
    ClassSchedule,
    Offer,
    Visitor,
    Registration,
    Admission,
    Trainee,
    BatchTransfer,
    Attendance,
    Assessment,
    Recommendation,
    Certificate,
    MoneyReceipt,
    DailySalesRecord,
);

impl CrudPage for Employee {
    type Service = EmployeeService;
}

macro_rules! page_dispatch {
    ($($t:ty),*) => {
        /// List page for a route segment ("batches").
        pub fn list_page(route: &str) -> Option<AnyView> {
            $(if route == <$t as Resource>::ROUTE {
                return Some(entity_list_page::<$t>());
            })*
            None
        }

        /// Create form when `id` is `None`, edit form otherwise.
        pub fn form_page(route: &str, id: Option<i64>) -> Option<AnyView> {
            $(if route == <$t as Resource>::ROUTE {
                return Some(entity_form_page::<$t>(id));
            })*
            None
        }

        pub fn detail_page(route: &str, id: i64) -> Option<AnyView> {
            $(if route == <$t as Resource>::ROUTE {
                return Some(entity_detail_page::<$t>(id));
            })*
            None
        }
    };
}

contracts::with_resources!(page_dispatch);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_crud_page<T: CrudPage>() {}

    macro_rules! all_have_pages {
        ($($t:ty),*) => {
            $(assert_crud_page::<$t>();)*
        };
    }

    #[test]
    fn test_every_resource_has_pages() {
        contracts::with_resources!(all_have_pages);
    }
}
