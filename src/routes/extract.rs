//! Extractors whose rejections use the service's JSON error envelope.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::{HeaderMap, StatusCode, header, request::Parts},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AppError, AppResult};

const JSON: &str = "application/json";

/// Reject the request with 415 unless it declares `expected` as its media type.
pub fn check_content_type(headers: &HeaderMap, expected: &str) -> AppResult<()> {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        tracing::debug!("request has no content type");
        return Err(AppError::UnsupportedMediaType(
            "No Content-Type specified.".to_string(),
        ));
    };

    let essence = value
        .to_str()
        .ok()
        .and_then(|v| v.split(';').next())
        .map(str::trim);
    match essence {
        Some(media_type) if media_type.eq_ignore_ascii_case(expected) => Ok(()),
        _ => {
            tracing::debug!(content_type = ?value, "unsupported content type");
            Err(AppError::UnsupportedMediaType(format!(
                "Content-Type must be {expected}"
            )))
        }
    }
}

/// A JSON request body, checked for its content type before it is parsed.
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        check_content_type(req.headers(), JSON)?;

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(rejection.body_text()),
                _ => AppError::BadRequest(rejection.body_text()),
            })?;
        let value = serde_json::from_slice(&bytes).map_err(|err| {
            AppError::BadRequest(format!("The request body is not valid JSON: {err}"))
        })?;
        Ok(Self(value))
    }
}

/// Path parameters. A segment that does not parse names no resource, hence 404.
pub struct PathId<T>(pub T);

impl<S, T> FromRequestParts<S> for PathId<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::NotFound(format!(
                "{} was not found: {}",
                parts.uri.path(),
                rejection.body_text()
            ))),
        }
    }
}

/// Query-string filters; values that do not parse are a 400.
pub struct Filters<T>(pub T);

impl<S, T> FromRequestParts<S> for Filters<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| Self(value))
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(content_type: Option<&'static str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(value) = content_type {
            headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(value));
        }
        headers
    }

    #[test]
    fn accepts_json_with_parameters() {
        assert!(check_content_type(&headers(Some("application/json")), JSON).is_ok());
        assert!(
            check_content_type(&headers(Some("Application/JSON; charset=utf-8")), JSON).is_ok()
        );
    }

    #[test]
    fn rejects_missing_or_other_types() {
        for content_type in [None, Some("text/plain"), Some("text/html"), Some("application/xml")] {
            let err = check_content_type(&headers(content_type), JSON).unwrap_err();
            assert!(matches!(err, AppError::UnsupportedMediaType(_)));
        }
    }
}
