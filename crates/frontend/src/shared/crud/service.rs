//! REST access to one entity type.
//!
//! Every entity exposes the same five actions; [`ResourceClient`] derives
//! their paths from the entity's [`Resource`] descriptor. An entity whose
//! controller deviates (envelopes, multipart bodies) provides its own
//! [`CrudService`] with the same signatures.

use std::marker::PhantomData;

use contracts::domain::common::Resource;
use contracts::shared::error::ApiError;

use crate::shared::api_client::ApiClient;

/// A file chosen in the form, sent under the given multipart part name.
pub type Attachment = (&'static str, web_sys::File);

#[allow(async_fn_in_trait)]
pub trait CrudService<T: Resource>: Sized {
    fn new(client: ApiClient) -> Self;

    async fn get_all(&self) -> Result<Vec<T>, ApiError>;

    async fn get_by_id(&self, id: i64) -> Result<T, ApiError>;

    async fn create(&self, entity: &T, attachments: &[Attachment]) -> Result<T, ApiError>;

    /// `None` when the backend answers with an empty body.
    async fn update(
        &self,
        id: i64,
        entity: &T,
        attachments: &[Attachment],
    ) -> Result<Option<T>, ApiError>;

    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}

/// JSON CRUD client for any [`Resource`].
pub struct ResourceClient<T> {
    client: ApiClient,
    _entity: PhantomData<T>,
}

impl<T: Resource> CrudService<T> for ResourceClient<T> {
    fn new(client: ApiClient) -> Self {
        Self {
            client,
            _entity: PhantomData,
        }
    }

    async fn get_all(&self) -> Result<Vec<T>, ApiError> {
        self.client.get_json(&T::paths().list()).await
    }

    async fn get_by_id(&self, id: i64) -> Result<T, ApiError> {
        self.client.get_record(&T::paths().get(id)).await
    }

    async fn create(&self, entity: &T, _attachments: &[Attachment]) -> Result<T, ApiError> {
        self.client.post_json(&T::paths().insert(), entity).await
    }

    async fn update(
        &self,
        id: i64,
        entity: &T,
        _attachments: &[Attachment],
    ) -> Result<Option<T>, ApiError> {
        self.client.put_json(&T::paths().update(id), entity).await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&T::paths().delete(id)).await
    }
}
