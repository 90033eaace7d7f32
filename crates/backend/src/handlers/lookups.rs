//! Entity-specific reads used by dropdowns and detail panels.

use std::collections::HashSet;

use axum::extract::{Path, State};
use axum::Json;
use contracts::domain::a002_designation::Designation;
use contracts::domain::a004_instructor::Instructor;
use contracts::domain::a010_batch::Batch;
use contracts::domain::a013_visitor::{Visitor, VisitorPaymentSummary};
use contracts::domain::a016_trainee::Trainee;
use contracts::domain::a019_assessment::Assessment;
use contracts::domain::a020_recommendation::Recommendation;
use contracts::domain::a021_certificate::Certificate;
use contracts::domain::a022_money_receipt::MoneyReceipt;
use contracts::domain::common::{BatchTraineeContext, Resource, TraineeOption};

use crate::shared::error::{AppError, AppResult};
use crate::shared::state::AppState;
use crate::shared::store::Store;

/// GET /Trainee/GetTraineeOptions
pub async fn trainee_options(State(state): State<AppState>) -> Json<Vec<TraineeOption>> {
    Json(
        state
            .store
            .all::<Trainee>()
            .iter()
            .map(trainee_option)
            .collect(),
    )
}

/// GET /Trainee/GetTraineesByBatch/:batch_id
pub async fn trainees_by_batch(
    State(state): State<AppState>,
    Path(batch_id): Path<i64>,
) -> Json<Vec<Trainee>> {
    Json(
        state
            .store
            .all_expanded::<Trainee>()
            .into_iter()
            .filter(|t| t.batch_id == batch_id)
            .collect(),
    )
}

/// GET /Designation/GetDesignationsByDepartment/:department_id
pub async fn designations_by_department(
    State(state): State<AppState>,
    Path(department_id): Path<i64>,
) -> Json<Vec<Designation>> {
    Json(
        state
            .store
            .all::<Designation>()
            .into_iter()
            .filter(|d| d.department_id == department_id)
            .collect(),
    )
}

/// GET /Assessment/GetBatchAssessmentContext/:batch_id
///
/// Trainees of the batch that have no assessment yet.
pub async fn assessment_context(
    State(state): State<AppState>,
    Path(batch_id): Path<i64>,
) -> AppResult<Json<BatchTraineeContext>> {
    let assessed: HashSet<i64> = state
        .store
        .all::<Assessment>()
        .iter()
        .map(|a| a.trainee_id)
        .collect();
    batch_context(&state.store, batch_id, |t| !assessed.contains(&t.trainee_id)).map(Json)
}

/// GET /Recommendation/GetBatchRecommendationContext/:batch_id
///
/// Assessed trainees of the batch that have no recommendation yet.
pub async fn recommendation_context(
    State(state): State<AppState>,
    Path(batch_id): Path<i64>,
) -> AppResult<Json<BatchTraineeContext>> {
    let assessed: HashSet<i64> = state
        .store
        .all::<Assessment>()
        .iter()
        .map(|a| a.trainee_id)
        .collect();
    let recommended: HashSet<i64> = state
        .store
        .all::<Recommendation>()
        .iter()
        .map(|r| r.trainee_id)
        .collect();
    batch_context(&state.store, batch_id, |t| {
        assessed.contains(&t.trainee_id) && !recommended.contains(&t.trainee_id)
    })
    .map(Json)
}

/// GET /Certificate/GetBatchCertificateContext/:batch_id
///
/// Trainees with a positive recommendation and no certificate yet.
pub async fn certificate_context(
    State(state): State<AppState>,
    Path(batch_id): Path<i64>,
) -> AppResult<Json<BatchTraineeContext>> {
    let recommended: HashSet<i64> = state
        .store
        .all::<Recommendation>()
        .iter()
        .filter(|r| r.is_recommended())
        .map(|r| r.trainee_id)
        .collect();
    let certified: HashSet<i64> = state
        .store
        .all::<Certificate>()
        .iter()
        .map(|c| c.trainee_id)
        .collect();
    batch_context(&state.store, batch_id, |t| {
        recommended.contains(&t.trainee_id) && !certified.contains(&t.trainee_id)
    })
    .map(Json)
}

/// GET /Visitor/GetVisitorPaymentSummary/:visitor_id
pub async fn visitor_payment_summary(
    State(state): State<AppState>,
    Path(visitor_id): Path<i64>,
) -> AppResult<Json<VisitorPaymentSummary>> {
    let visitor = state
        .store
        .all::<Visitor>()
        .into_iter()
        .find(|v| v.visitor_id == visitor_id)
        .ok_or_else(|| AppError::not_found(Visitor::NAME, visitor_id))?;

    let receipts = state
        .store
        .all::<MoneyReceipt>()
        .into_iter()
        .filter(|r| r.visitor_id == visitor_id)
        .map(|r| (r.payable_amount, r.paid_amount));

    Ok(Json(VisitorPaymentSummary::from_receipts(&visitor, receipts)))
}

fn batch_context(
    store: &Store,
    batch_id: i64,
    eligible: impl Fn(&Trainee) -> bool,
) -> AppResult<BatchTraineeContext> {
    let batch = store
        .all::<Batch>()
        .into_iter()
        .find(|b| b.batch_id == batch_id)
        .ok_or_else(|| AppError::not_found(Batch::NAME, batch_id))?;

    let instructor_name = store
        .all::<Instructor>()
        .into_iter()
        .find(|i| i.instructor_id == batch.instructor_id)
        .map(|i| i.instructor_name)
        .unwrap_or_default();

    let trainees = store
        .all::<Trainee>()
        .iter()
        .filter(|t| t.batch_id == batch_id && eligible(t))
        .map(trainee_option)
        .collect();

    Ok(BatchTraineeContext {
        batch_id,
        instructor_id: batch.instructor_id,
        instructor_name,
        trainees,
    })
}

fn trainee_option(trainee: &Trainee) -> TraineeOption {
    TraineeOption {
        trainee_id: trainee.trainee_id,
        trainee_name: trainee.trainee_name.clone(),
    }
}
