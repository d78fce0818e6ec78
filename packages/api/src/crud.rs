//! Typed CRUD calls for [`Resource`] types.

use crate::client::Backend;
use crate::error::ApiError;
use crate::models::{EntityId, RegisterRequest, Resource};

pub const REGISTER_PATH: &str = "/auth/register";

/// `GET {PATH}`.
pub async fn list<E: Resource>(backend: &impl Backend) -> Result<Vec<E>, ApiError> {
    backend.get(E::PATH).await
}

/// `POST {PATH}` with the draft as body.
pub async fn create<E: Resource>(backend: &impl Backend, draft: &E) -> Result<Option<E>, ApiError> {
    backend.post(E::PATH, draft).await
}

/// `PUT {PATH}/{id}` with the full draft as body.
pub async fn update<E: Resource>(
    backend: &impl Backend,
    id: &EntityId,
    draft: &E,
) -> Result<Option<E>, ApiError> {
    backend.put(&E::item_path(id), draft).await
}

/// `DELETE {PATH}/{id}`.
pub async fn delete<E: Resource>(backend: &impl Backend, id: &EntityId) -> Result<(), ApiError> {
    backend.delete(&E::item_path(id)).await
}

/// `POST /auth/register`. The response body is not used.
pub async fn register(backend: &impl Backend, request: &RegisterRequest) -> Result<(), ApiError> {
    backend
        .post::<_, serde_json::Value>(REGISTER_PATH, request)
        .await
        .map(|_| ())
}
