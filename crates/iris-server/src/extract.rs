//! Request body extractors.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
    Json,
};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::AppError;

/// JSON body extractor that also accepts requests without a `Content-Type`.
///
/// A missing header means the body is parsed as JSON anyway. A header naming
/// anything other than JSON is still rejected with 415.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let parsed = if req.headers().contains_key(header::CONTENT_TYPE) {
            Json::<T>::from_request(req, state).await
        } else {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
            Json::<T>::from_bytes(&bytes)
        };

        match parsed {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                info!("Rejected request body: {}", rejection.body_text());
                Err(AppError::from(rejection))
            }
        }
    }
}
