use axum::http::{header, Method};
use axum::routing::{delete, get, post, put};
use axum::{middleware, Router};
use contracts::domain::a001_department::Department;
use contracts::domain::a002_designation::{aggregate as designation, Designation};
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
use contracts::domain::a013_visitor::{aggregate as visitor, Visitor};
use contracts::domain::a014_registration::Registration;
use contracts::domain::a015_admission::Admission;
use contracts::domain::a016_trainee::{aggregate as trainee, Trainee};
use contracts::domain::a017_batch_transfer::BatchTransfer;
use contracts::domain::a018_attendance::Attendance;
use contracts::domain::a019_assessment::{aggregate as assessment, Assessment};
use contracts::domain::a020_recommendation::{aggregate as recommendation, Recommendation};
use contracts::domain::a021_certificate::{aggregate as certificate, Certificate};
use contracts::domain::a022_money_receipt::MoneyReceipt;
use contracts::domain::a023_daily_sales_record::DailySalesRecord;
use contracts::domain::common::{Action, Resource};
use contracts::system::auth::LOGIN_PATH;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers::{employee, lookups, resource};
use crate::shared::state::AppState;
use crate::system;

/// The five standard routes of one entity controller.
fn crud_routes<T: Resource>(router: Router<AppState>) -> Router<AppState> {
    let paths = T::paths();
    router
        .route(&paths.list(), get(resource::list::<T>))
        .route(
            &format!("{}/:id", paths.action_path(Action::Get)),
            get(resource::get_by_id::<T>),
        )
        .route(&paths.insert(), post(resource::insert::<T>))
        .route(
            &format!("{}/:id", paths.action_path(Action::Update)),
            put(resource::update::<T>),
        )
        .route(
            &format!("{}/:id", paths.action_path(Action::Delete)),
            delete(resource::delete::<T>),
        )
}

fn employee_routes(router: Router<AppState>) -> Router<AppState> {
    let paths = Employee::paths();
    router
        .route(&paths.list(), get(employee::list))
        .route(
            &format!("{}/:id", paths.action_path(Action::Get)),
            get(employee::get_by_id),
        )
        .route(&paths.insert(), post(employee::insert))
        .route(
            &format!("{}/:id", paths.action_path(Action::Update)),
            put(employee::update),
        )
        .route(
            &format!("{}/:id", paths.action_path(Action::Delete)),
            delete(employee::delete),
        )
}

fn lookup_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            &Trainee::paths().custom(trainee::OPTIONS_ACTION),
            get(lookups::trainee_options),
        )
        .route(
            &format!("{}/:batch_id", Trainee::paths().custom(trainee::BY_BATCH_ACTION)),
            get(lookups::trainees_by_batch),
        )
        .route(
            &format!("{}/:department_id", designation::BY_DEPARTMENT.path),
            get(lookups::designations_by_department),
        )
        .route(
            &format!("{}/:batch_id", Assessment::paths().custom(assessment::CONTEXT_ACTION)),
            get(lookups::assessment_context),
        )
        .route(
            &format!(
                "{}/:batch_id",
                Recommendation::paths().custom(recommendation::CONTEXT_ACTION)
            ),
            get(lookups::recommendation_context),
        )
        .route(
            &format!("{}/:batch_id", Certificate::paths().custom(certificate::CONTEXT_ACTION)),
            get(lookups::certificate_context),
        )
        .route(
            &format!("{}/:visitor_id", visitor::PAYMENT_SUMMARY_PATH),
            get(lookups::visitor_payment_summary),
        )
}

/// Every entity route, all behind the bearer token check.
fn protected_routes(state: AppState) -> Router<AppState> {
    let mut router = Router::new();
    // ========================================
    // Organisation
    // ========================================
    router = crud_routes::<Department>(router);
    router = crud_routes::<Designation>(router);
    router = employee_routes(router);
    router = crud_routes::<Instructor>(router);
    // ========================================
    // Catalogue and timetable
    // ========================================
    router = crud_routes::<Course>(router);
    router = crud_routes::<CourseCombo>(router);
    router = crud_routes::<ClassRoom>(router);
    router = crud_routes::<Day>(router);
    router = crud_routes::<Slot>(router);
    router = crud_routes::<Batch>(router);
    router = crud_routes::<ClassSchedule>(router);
    router = crud_routes::<Offer>(router);
    // ========================================
    // Enrolment pipeline
    // ========================================
    router = crud_routes::<Visitor>(router);
    router = crud_routes::<Registration>(router);
    router = crud_routes::<Admission>(router);
    router = crud_routes::<Trainee>(router);
    router = crud_routes::<BatchTransfer>(router);
    router = crud_routes::<Attendance>(router);
    router = crud_routes::<Assessment>(router);
    router = crud_routes::<Recommendation>(router);
    router = crud_routes::<Certificate>(router);
    // ========================================
    // Accounts
    // ========================================
    router = crud_routes::<MoneyReceipt>(router);
    router = crud_routes::<DailySalesRecord>(router);

    lookup_routes(router).route_layer(middleware::from_fn_with_state(
        state,
        system::auth::middleware::require_auth,
    ))
}

/// Application router: public health and login, the protected API, and
/// the built frontend for every other path when `static_dir` is set.
pub fn build_app(state: AppState, static_dir: Option<&str>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    let mut router = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(LOGIN_PATH, post(system::handlers::auth::login))
        .merge(protected_routes(state.clone()));

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors)
        .with_state(state)
}
