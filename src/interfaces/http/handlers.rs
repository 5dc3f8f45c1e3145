use super::error::ApiError;
use super::router::AppState;
use crate::domain::deposit::{DepositRequest, DepositResponse};
use crate::domain::status::{StatusRequest, StatusResponse};
use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use tracing::warn;

/// `POST /api/v1/deposit`
pub async fn deposit(
    State(state): State<AppState>,
    payload: Result<Json<DepositRequest>, JsonRejection>,
) -> Result<Json<DepositResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| {
        warn!(error = %e, "Failed to decode request body");
        ApiError::bad_request("Invalid request body")
    })?;

    req.validate().map_err(|e| {
        warn!(error = %e, "Failed to validate request");
        ApiError::from_merchant_error(&e, "Invalid request body")
    })?;

    let response = state
        .service
        .process_deposit(req)
        .await
        .map_err(|e| ApiError::from_merchant_error(&e, "Failed to process deposit"))?;

    Ok(Json(response))
}

/// `GET /api/v1/status?orderId=..&merchantOrderId=..`
pub async fn status(
    State(state): State<AppState>,
    query: Result<Query<StatusRequest>, QueryRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let Query(req) = query.map_err(|e| {
        warn!(error = %e, "Failed to decode request");
        ApiError::bad_request("Failed to decode request")
    })?;

    req.validate().map_err(|e| {
        warn!(error = %e, "Failed to validate request");
        ApiError::from_merchant_error(&e, "Failed to decode request")
    })?;

    let response = state
        .service
        .check_status(req)
        .await
        .map_err(|e| ApiError::from_merchant_error(&e, "Failed to check status"))?;

    Ok(Json(response))
}
