//! Result envelope used by the Employee endpoints.
//!
//! Every Employee call answers with `{isSuccess, message, data, httpStatusCode}`,
//! on success and on failure alike. The Employee service unwraps it into the
//! same `Result<T, ApiError>` the other services return.

use serde::{Deserialize, Serialize};

use super::error::ApiError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse<T> {
    pub is_success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
    pub http_status_code: u16,
}

impl<T> ServiceResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            is_success: true,
            message: Some(message.into()),
            data: Some(data),
            http_status_code: 200,
        }
    }

    pub fn failure(http_status_code: u16, message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            message: Some(message.into()),
            data: None,
            http_status_code,
        }
    }

    /// Unwrap the envelope. A successful envelope may carry no data
    /// (delete), hence the `Option`.
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        if self.is_success {
            return Ok(self.data);
        }
        if self.http_status_code == 401 {
            return Err(ApiError::Unauthorized);
        }
        Err(ApiError::Status {
            status: self.http_status_code,
            message: self.message.filter(|m| !m.trim().is_empty()),
        })
    }

    /// Like [`into_result`](Self::into_result) but a success without data
    /// is a decode error.
    pub fn into_data(self) -> Result<T, ApiError> {
        self.into_result()?
            .ok_or_else(|| ApiError::Decode("envelope carried no data".to_string()))
    }

    /// Single-record read: a success without data means the record is gone.
    pub fn into_record(self) -> Result<T, ApiError> {
        self.into_result()?.ok_or(ApiError::Missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_unwraps_data() {
        let body = r#"{"isSuccess":true,"message":"ok","data":[1,2],"httpStatusCode":200}"#;
        let env: ServiceResponse<Vec<i64>> = serde_json::from_str(body).unwrap();
        assert_eq!(env.into_data().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_failure_envelope_becomes_status_error() {
        let body = r#"{"isSuccess":false,"message":"Employee not found","data":null,"httpStatusCode":404}"#;
        let env: ServiceResponse<Vec<i64>> = serde_json::from_str(body).unwrap();
        let err = env.into_result().unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.user_message(), "Employee not found");
    }

    #[test]
    fn test_success_without_data() {
        let env: ServiceResponse<()> = ServiceResponse {
            is_success: true,
            message: Some("deleted".into()),
            data: None,
            http_status_code: 200,
        };
        assert_eq!(env.clone().into_result().unwrap(), None);
        assert!(matches!(env.clone().into_data(), Err(ApiError::Decode(_))));
        assert!(env.into_record().unwrap_err().is_not_found());
    }
}
