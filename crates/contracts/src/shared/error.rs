//! Error taxonomy for calls to the REST backend.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Shown when neither the response body nor the transport says anything useful.
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

/// Longest plain-text body still treated as a human readable message.
const MAX_PLAIN_MESSAGE_LEN: usize = 300;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never completed (DNS, CORS, connection reset, ...).
    #[error("network error: {0}")]
    Transport(String),

    /// 401 from the backend; the session is no longer valid.
    #[error("session expired, please sign in again")]
    Unauthorized,

    /// Any other non-success status. `message` is whatever could be
    /// extracted from the body.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    /// The body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// A successful read that carried no record (empty body or `null`).
    #[error("record not found")]
    Missing,
}

impl ApiError {
    /// Classify a non-success response.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        Self::Status {
            status,
            message: extract_message(body),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Missing) || self.status() == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Text for the page: structured body message first, then the transport
    /// message, then a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Transport(message) if !message.trim().is_empty() => message.clone(),
            Self::Unauthorized => self.to_string(),
            _ => GENERIC_ERROR.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

/// Decode a single-record body. Empty and `null` bodies are [`ApiError::Missing`].
pub fn decode_record<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Missing);
    }
    match serde_json::from_str::<Value>(trimmed)? {
        Value::Null => Err(ApiError::Missing),
        value => serde_json::from_value(value).map_err(ApiError::from),
    }
}

/// Pull a readable message out of an error body.
///
/// Understands `{"message": ..}` / `{"Message": ..}` / `{"error": ..}`,
/// validation problem documents (`{"title": .., "errors": {"Field": ["msg"]}}`),
/// bare JSON strings and short plain-text bodies. HTML error pages are ignored.
pub fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => {
            if let Some(Value::Object(errors)) = map.get("errors") {
                let details: Vec<String> = errors
                    .values()
                    .flat_map(|v| match v {
                        Value::Array(items) => items
                            .iter()
                            .filter_map(|i| i.as_str().map(str::to_string))
                            .collect::<Vec<_>>(),
                        Value::String(s) => vec![s.clone()],
                        _ => Vec::new(),
                    })
                    .collect();
                if !details.is_empty() {
                    return Some(details.join("; "));
                }
            }
            ["message", "Message", "error", "title"]
                .iter()
                .filter_map(|key| map.get(*key).and_then(Value::as_str))
                .map(str::trim)
                .find(|s| !s.is_empty())
                .map(str::to_string)
        }
        Ok(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Ok(_) => None,
        Err(_) => {
            if trimmed.starts_with('<') || trimmed.len() > MAX_PLAIN_MESSAGE_LEN {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_field_is_preferred() {
        let err = ApiError::from_status(400, r#"{"message":"Batch name already exists"}"#);
        assert_eq!(err.user_message(), "Batch name already exists");
    }

    #[test]
    fn test_validation_problem_details() {
        let body = r#"{"title":"One or more validation errors occurred.",
                       "errors":{"Email":["Email is invalid"],"ContactNo":["Required"]}}"#;
        let msg = extract_message(body).unwrap();
        assert!(msg.contains("Email is invalid"));
        assert!(msg.contains("Required"));
    }

    #[test]
    fn test_plain_text_and_html_bodies() {
        assert_eq!(extract_message("Trainee not found").as_deref(), Some("Trainee not found"));
        assert_eq!(extract_message("<html><body>500</body></html>"), None);
        assert_eq!(extract_message("   "), None);
    }

    #[test]
    fn test_fallback_chain() {
        let no_body = ApiError::from_status(500, "");
        assert_eq!(no_body.user_message(), GENERIC_ERROR);

        let transport = ApiError::Transport("connection refused".into());
        assert_eq!(transport.user_message(), "connection refused");

        let empty_transport = ApiError::Transport(String::new());
        assert_eq!(empty_transport.user_message(), GENERIC_ERROR);
    }

    #[test]
    fn test_unauthorized_and_not_found() {
        assert!(ApiError::from_status(401, "{}").is_unauthorized());
        assert!(ApiError::from_status(404, "").is_not_found());
        assert!(!ApiError::Transport("x".into()).is_not_found());
    }

    #[test]
    fn test_empty_record_body_is_not_found() {
        #[derive(Debug, serde::Deserialize)]
        struct Course {
            #[serde(rename = "courseId")]
            course_id: i64,
        }

        for body in ["", "  ", "null"] {
            let err = decode_record::<Course>(body).unwrap_err();
            assert!(err.is_not_found(), "{:?} -> {:?}", body, err);
        }
        assert_eq!(decode_record::<Course>(r#"{"courseId":4}"#).unwrap().course_id, 4);
        assert!(matches!(decode_record::<Course>("[1]"), Err(ApiError::Decode(_))));
    }
}
