//! HTTP client for the REST backend.
//!
//! A client is cheap to build; pages take a fresh one from the auth context
//! for every call so the current token is always attached.

use contracts::shared::error::{decode_record, ApiError};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

use super::api_utils::join_url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token,
        }
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .prepare(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(transport)?;
        require_body(read_body(response).await?)
    }

    /// Single record; an empty or `null` body is [`ApiError::Missing`].
    pub async fn get_record<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .prepare(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(transport)?;
        decode_record(&read_text(response).await?)
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .prepare(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(transport)?;
        require_body(read_body(response).await?)
    }

    /// Some backends answer an update with an empty body.
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<Option<T>, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .prepare(Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(transport)?;
        read_body(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.send_delete(path).await?;
        read_body::<serde_json::Value>(response).await.map(|_| ())
    }

    /// DELETE for controllers that answer with a body.
    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send_delete(path).await?;
        require_body(read_body(response).await?)
    }

    async fn send_delete(&self, path: &str) -> Result<Response, ApiError> {
        self.prepare(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(transport)
    }

    /// Multipart request. The browser sets the content type with its
    /// boundary, so none is set here.
    pub async fn send_form<T: DeserializeOwned>(
        &self,
        method: FormMethod,
        path: &str,
        form: FormData,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let builder = match method {
            FormMethod::Post => Request::post(&url),
            FormMethod::Put => Request::put(&url),
        };
        let response = self
            .prepare(builder)
            .body(form)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(transport)?;
        require_body(read_body(response).await?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMethod {
    Post,
    Put,
}

fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

/// Body text of a successful response.
async fn read_text(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let text = response.text().await.map_err(transport)?;
    if !response.ok() {
        log::warn!("{} -> {}", response.url(), status);
        return Err(ApiError::from_status(status, &text));
    }
    Ok(text)
}

/// Status check, then decode a possibly empty body.
async fn read_body<T: DeserializeOwned>(response: Response) -> Result<Option<T>, ApiError> {
    let text = read_text(response).await?;
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&text).map(Some).map_err(ApiError::from)
}

fn require_body<T>(body: Option<T>) -> Result<T, ApiError> {
    body.ok_or_else(|| ApiError::Decode("empty response body".to_string()))
}
