use super::repository::session::Session;
use crate::types::Context;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{request::Parts, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, RequestPartsExt};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

enum Error {
    MissingToken,
    InvalidSession,
    ExpiredToken,
    UnexpectedError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidSession => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Invalid session token" })),
            )
                .into_response(),
            Self::ExpiredToken => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Session token has expired" })),
            )
                .into_response(),
            Self::UnexpectedError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to verify session" })),
            )
                .into_response(),
        }
    }
}

async fn verify_access_token(ctx: &Context, access_token: &str) -> Result<Session, Error> {
    let session = ctx
        .sessions
        .find_by_access_token(access_token)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::InvalidSession)?;

    if session.access_token_expires_at < Utc::now().naive_utc() {
        return Err(Error::ExpiredToken);
    }

    Ok(session)
}

/// The authenticated caller. Only the identity is resolved here; whether a
/// user record still exists for it is up to each operation.
#[derive(Clone, Debug)]
pub struct Auth {
    pub user_id: String,
}

#[async_trait]
impl FromRequestParts<Arc<Context>> for Auth {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &Arc<Context>,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| Error::MissingToken.into_response())?;

        verify_access_token(ctx, bearer.token())
            .await
            .map(|session| Self {
                user_id: session.user_id,
            })
            .map_err(IntoResponse::into_response)
    }
}
