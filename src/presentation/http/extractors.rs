// src/presentation/http/extractors.rs
use crate::context::RequestContext;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use std::convert::Infallible;

use super::error::HttpError;

/// The request's [`RequestContext`]. Falls back to an id-less context (with a
/// warning) when the middleware did not run.
#[derive(Debug, Clone)]
pub struct Ctx(pub RequestContext);

impl<S> FromRequestParts<S> for Ctx
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ctx = parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_else(|| {
                tracing::warn!(path = %parts.uri.path(), "request context missing");
                RequestContext::background()
            });
        Ok(Self(ctx))
    }
}

/// JSON body whose every rejection (syntax, shape, content type) is a 400.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let ctx = req.extensions().get::<RequestContext>().cloned();
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                let request_id = ctx.as_ref().map(RequestContext::request_id).unwrap_or("");
                tracing::warn!(
                    request_id = %request_id,
                    error = %rejection.body_text(),
                    "could not decode request body"
                );
                Err(HttpError::bad_request("could not decode request body"))
            }
        }
    }
}

/// The `{id}` path segment. Missing or blank ids are a 400.
#[derive(Debug, Clone)]
pub struct ArticlePath(pub String);

impl<S> FromRequestParts<S> for ArticlePath
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::warn!(error = %rejection.body_text(), "id not provided");
                HttpError::bad_request("article id not provided")
            })?;

        if id.trim().is_empty() {
            return Err(HttpError::bad_request("article id not provided"));
        }
        Ok(Self(id))
    }
}
