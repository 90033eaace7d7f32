//! Employee controller client.
//!
//! Unwraps the `ServiceResponse` envelope so callers get the same
//! `Result<T, ApiError>` as from [`ResourceClient`](crate::shared::crud::ResourceClient),
//! and sends insert/update as multipart form data.

use contracts::domain::a003_employee::Employee;
use contracts::domain::common::Resource;
use contracts::shared::error::ApiError;
use contracts::shared::service_response::ServiceResponse;
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::shared::api_client::{ApiClient, FormMethod};
use crate::shared::crud::service::{Attachment, CrudService};

pub struct EmployeeService {
    client: ApiClient,
}

fn js_error(e: JsValue) -> ApiError {
    ApiError::Decode(format!("{:?}", e))
}

/// Scalar fields as text parts, files under their part names.
fn form_data(employee: &Employee, attachments: &[Attachment]) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(js_error)?;
    if let Value::Object(fields) = serde_json::to_value(employee)? {
        for (key, value) in fields {
            let text = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                // nested references and unset paths are not submitted
                _ => continue,
            };
            form.append_with_str(&key, &text).map_err(js_error)?;
        }
    }
    for (name, file) in attachments {
        form.append_with_blob_and_filename(name, file, &file.name())
            .map_err(js_error)?;
    }
    Ok(form)
}

impl CrudService<Employee> for EmployeeService {
    fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn get_all(&self) -> Result<Vec<Employee>, ApiError> {
        self.client
            .get_json::<ServiceResponse<Vec<Employee>>>(&Employee::paths().list())
            .await?
            .into_data()
    }

    async fn get_by_id(&self, id: i64) -> Result<Employee, ApiError> {
        self.client
            .get_json::<ServiceResponse<Employee>>(&Employee::paths().get(id))
            .await?
            .into_record()
    }

    async fn create(&self, entity: &Employee, attachments: &[Attachment]) -> Result<Employee, ApiError> {
        let form = form_data(entity, attachments)?;
        self.client
            .send_form::<ServiceResponse<Employee>>(FormMethod::Post, &Employee::paths().insert(), form)
            .await?
            .into_data()
    }

    async fn update(
        &self,
        id: i64,
        entity: &Employee,
        attachments: &[Attachment],
    ) -> Result<Option<Employee>, ApiError> {
        let form = form_data(entity, attachments)?;
        self.client
            .send_form::<ServiceResponse<Employee>>(FormMethod::Put, &Employee::paths().update(id), form)
            .await?
            .into_result()
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .delete_json::<ServiceResponse<Value>>(&Employee::paths().delete(id))
            .await?
            .into_result()
            .map(|_| ())
    }
}
