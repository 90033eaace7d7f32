//! Read-only shapes returned by the bespoke lookup endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TraineeOption {
    pub trainee_id: i64,
    pub trainee_name: String,
}

/// A batch's instructor plus the trainees still eligible for the next
/// step of the pipeline (assessment, recommendation or certificate).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchTraineeContext {
    pub batch_id: i64,
    pub instructor_id: i64,
    pub instructor_name: String,
    pub trainees: Vec<TraineeOption>,
}
