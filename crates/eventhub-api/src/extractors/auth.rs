//! Caller extractors: pull Basic credentials from the `Authorization`
//! header and resolve them through the [`AuthGate`](eventhub_auth::AuthGate).

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use eventhub_core::error::{AppError, ErrorKind};
use eventhub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// An authenticated caller. Rejects anonymous requests with 401.
#[derive(Debug, Clone)]
pub struct CurrentAccount(pub RequestContext);

impl CurrentAccount {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for CurrentAccount {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// An optional caller. Anonymous requests pass through as `None`;
/// credentials that are present but wrong still reject with 401.
#[derive(Debug, Clone)]
pub struct MaybeAccount(pub Option<RequestContext>);

impl MaybeAccount {
    /// Returns the inner context, if a caller is present.
    pub fn context(&self) -> Option<&RequestContext> {
        self.0.as_ref()
    }
}

impl FromRequestParts<AppState> for MaybeAccount {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts.headers.get(AUTHORIZATION);
        let account = state
            .auth_gate
            .resolve_header(header)
            .await
            .map_err(|e| reject(state, e))?;

        Ok(MaybeAccount(account.as_ref().map(RequestContext::from_account)))
    }
}

impl FromRequestParts<AppState> for CurrentAccount {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match MaybeAccount::from_request_parts(parts, state).await? {
            MaybeAccount(Some(ctx)) => Ok(CurrentAccount(ctx)),
            MaybeAccount(None) => Err(ApiError::unauthenticated(
                &state.config.auth.realm,
                "Authentication required",
            )),
        }
    }
}

fn reject(state: &AppState, err: AppError) -> ApiError {
    if err.is(ErrorKind::Authentication) {
        ApiError::unauthenticated(&state.config.auth.realm, err.message)
    } else {
        ApiError::App(err)
    }
}
