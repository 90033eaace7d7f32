//! Employee controller.
//!
//! Answers every call with a `ServiceResponse` envelope (HTTP 200, the
//! outcome is in `isSuccess`/`httpStatusCode`). Insert and update read a
//! multipart form: text parts named like the entity's JSON keys plus the
//! optional `imageFile` and `documentFile` parts.

use axum::extract::{Multipart, Path, State};
use axum::Json;
use contracts::domain::a003_employee::{aggregate as employee, Employee};
use contracts::domain::common::Resource;
use contracts::shared::form::FormValues;
use contracts::shared::service_response::ServiceResponse;
use serde_json::{Map, Value};

use crate::shared::error::{AppError, AppResult};
use crate::shared::state::AppState;
use crate::shared::store::flat_row;
use crate::system::auth::password::hash_password;

/// Row key of the stored Argon2 hash. Never part of the `Employee` type.
const PASSWORD_HASH: &str = "passwordHash";

const UPLOAD_PREFIX: &str = "/uploads/employee";

type Envelope<T> = Json<ServiceResponse<T>>;

fn envelope<T>(result: AppResult<T>, success: &str) -> Envelope<T> {
    match result {
        Ok(data) => Json(ServiceResponse::ok(data, success)),
        Err(e) => {
            let status = e.status();
            if status.is_server_error() {
                tracing::error!("Employee request failed: {:#}", e);
            }
            Json(ServiceResponse::failure(status.as_u16(), e.to_string()))
        }
    }
}

/// GET /Employee/GetEmployees
pub async fn list(State(state): State<AppState>) -> Envelope<Vec<Employee>> {
    envelope(Ok(state.store.all_expanded::<Employee>()), "Employees loaded")
}

/// GET /Employee/GetEmployee/:id
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> Envelope<Employee> {
    let result = state
        .store
        .find_expanded::<Employee>(id)
        .ok_or_else(|| AppError::not_found(Employee::NAME, id));
    envelope(result, "Employee loaded")
}

/// POST /Employee/InsertEmployee (multipart)
pub async fn insert(State(state): State<AppState>, multipart: Multipart) -> Envelope<Employee> {
    envelope(insert_employee(&state, multipart).await, "Employee created")
}

/// PUT /Employee/UpdateEmployee/:id (multipart)
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> Envelope<Employee> {
    envelope(update_employee(&state, id, multipart).await, "Employee updated")
}

/// DELETE /Employee/DeleteEmployee/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Envelope<()> {
    let result = if state.store.delete(Employee::NAME, id) {
        tracing::info!("Deleted Employee {}", id);
        Ok(())
    } else {
        Err(AppError::not_found(Employee::NAME, id))
    };
    envelope(result, "Employee deleted")
}

async fn insert_employee(state: &AppState, multipart: Multipart) -> AppResult<Employee> {
    let form = EmployeeForm::read(multipart, None).await?;
    let entity = form.entity;

    let mut row = flat_row(&entity.clone().without_secrets())?;
    row.insert(PASSWORD_HASH.into(), Value::String(hash_password(&entity.password)?));
    let id = state.store.insert(Employee::NAME, Employee::ID_FIELD, row);
    tracing::info!("Inserted Employee {}", id);

    state
        .store
        .find_expanded::<Employee>(id)
        .ok_or_else(|| AppError::not_found(Employee::NAME, id))
}

async fn update_employee(state: &AppState, id: i64, multipart: Multipart) -> AppResult<Employee> {
    let existing = state
        .store
        .row(Employee::NAME, id)
        .ok_or_else(|| AppError::not_found(Employee::NAME, id))?;
    let mut entity = EmployeeForm::read(multipart, Some(id)).await?.entity;

    // a blank password or missing upload keeps what is stored
    let password_hash = if entity.password.is_empty() {
        existing.get(PASSWORD_HASH).cloned().unwrap_or(Value::Null)
    } else {
        Value::String(hash_password(&entity.password)?)
    };
    if entity.image_path.is_none() {
        entity.image_path = stored_path(&existing, "imagePath");
    }
    if entity.document_path.is_none() {
        entity.document_path = stored_path(&existing, "documentPath");
    }

    let mut row = flat_row(&entity.without_secrets())?;
    row.insert(PASSWORD_HASH.into(), password_hash);
    if !state.store.update(Employee::NAME, Employee::ID_FIELD, id, row) {
        return Err(AppError::not_found(Employee::NAME, id));
    }
    tracing::info!("Updated Employee {}", id);

    state
        .store
        .find_expanded::<Employee>(id)
        .ok_or_else(|| AppError::not_found(Employee::NAME, id))
}

fn stored_path(row: &Map<String, Value>, key: &str) -> Option<String> {
    row.get(key).and_then(Value::as_str).map(str::to_string)
}

/// A validated employee read from a multipart body.
struct EmployeeForm {
    entity: Employee,
}

impl EmployeeForm {
    async fn read(mut multipart: Multipart, id: Option<i64>) -> AppResult<Self> {
        let mut values = FormValues::default();
        if let Some(id) = id {
            values.set(Employee::ID_FIELD, Value::from(id));
        }
        let mut image_path = None;
        let mut document_path = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
        {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                employee::IMAGE_FILE | employee::DOCUMENT_FILE => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::BadRequest(format!("Failed to read {}: {}", name, e)))?;
                    if file_name.is_empty() || bytes.is_empty() {
                        continue;
                    }
                    tracing::debug!("Received {} ({} bytes) as {}", file_name, bytes.len(), name);
                    let path = Some(upload_path(&file_name));
                    if name == employee::IMAGE_FILE {
                        image_path = path;
                    } else {
                        document_path = path;
                    }
                }
                _ => {
                    let Some(meta) = Employee::form_fields().iter().find(|f| f.name == name) else {
                        continue;
                    };
                    let text = field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(format!("Failed to read {}: {}", name, e)))?;
                    values.set_from_input(meta, &text);
                }
            }
        }

        let errors = values.validate::<Employee>();
        if let Some((_, message)) = errors.iter().next() {
            return Err(AppError::BadRequest(message.to_string()));
        }

        let mut entity: Employee = values.to_entity()?;
        if let Some(id) = id {
            entity.set_id(id);
        }
        entity.image_path = image_path;
        entity.document_path = document_path;
        Ok(Self { entity })
    }
}

/// Stored location of an upload; only the path is kept.
fn upload_path(file_name: &str) -> String {
    let safe: String = file_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
        .collect();
    format!("{}/{}_{}", UPLOAD_PREFIX, uuid::Uuid::new_v4().simple(), safe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_path_is_sanitized() {
        let path = upload_path("my photo (1).png");
        assert!(path.starts_with("/uploads/employee/"));
        assert!(path.ends_with("_my_photo__1_.png"));
        assert!(!path.contains(' '));
    }

    #[test]
    fn test_failure_envelope_keeps_status() {
        let Json(env) = envelope::<()>(Err(AppError::not_found("Employee", 9)), "ok");
        assert!(!env.is_success);
        assert_eq!(env.http_status_code, 404);
        assert_eq!(env.message.as_deref(), Some("Employee 9 not found"));
    }
}
