//! Account registration handlers.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

use crate::dto::request::RegisterAccountRequest;
use crate::dto::response::AccountResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/accounts
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterAccountRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiError> {
    let Json(req) = payload?;

    let account = state
        .account_service
        .register(&req.email, &req.password)
        .await?;

    Ok((StatusCode::CREATED, Json(account.into())))
}
