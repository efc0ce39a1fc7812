//! `ValidatedJson` extractor

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::error::{AppError, FieldError};

use super::Schema;

/// A payload type with a declarative schema
pub trait Validated: DeserializeOwned {
    fn schema() -> &'static Schema;
}

/// JSON body checked against `T::schema()` before it is deserialized.
///
/// An unparsable body, a wrong content type or a schema violation is
/// rejected with a 400 validation envelope, so handlers only ever see valid
/// payloads and never touch the store for bad input. Failures reading the
/// body itself (size limit, broken stream) keep axum's own status.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: Validated,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(reject_body)?;

        T::schema()
            .validate(&body)
            .map_err(|errors| AppError::validation(errors).into_response())?;

        let data = serde_json::from_value(body).map_err(|e| {
            AppError::validation(vec![FieldError::new("", e.to_string())]).into_response()
        })?;
        Ok(Self(data))
    }
}

fn reject_body(rejection: JsonRejection) -> Response {
    match rejection {
        JsonRejection::BytesRejection(_) => rejection.into_response(),
        other => AppError::validation(vec![FieldError::new("", other.body_text())]).into_response(),
    }
}
