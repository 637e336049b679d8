use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tokio::task;

use super::dto::{NewExpense, NewIncome, StatusResponse, SummaryResponse, TransactionsResponse};
use super::error::{ApiError, ApiResult};
use super::AppState;

pub async fn serve_index(State(state): State<AppState>) -> Response {
    match tokio::fs::read_to_string(&state.index_file).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::warn!(path = %state.index_file.display(), "Index file unavailable: {}", e);
            not_found().await.into_response()
        }
    }
}

pub async fn list_transactions(State(state): State<AppState>) -> Json<TransactionsResponse> {
    let data = state.ledger.snapshot();
    Json(TransactionsResponse::from(&data))
}

pub async fn summary(State(state): State<AppState>) -> Json<SummaryResponse> {
    Json(SummaryResponse::from(state.ledger.totals()))
}

pub async fn create_transaction(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<StatusResponse>> {
    let body = body?;
    let value: Value = serde_json::from_slice(&body)
        .map_err(|e| ApiError::InvalidRequest(format!("Malformed JSON body: {}", e)))?;
    if !value.is_object() {
        return Err(ApiError::InvalidRequest(
            "Request body must be a JSON object".to_string(),
        ));
    }

    let kind = value.get("type").and_then(Value::as_str).map(str::to_owned);
    let ledger = state.ledger.clone();
    match kind.as_deref() {
        Some("expense") => {
            let expense = serde_json::from_value::<NewExpense>(value)
                .map_err(|e| ApiError::InvalidRequest(e.to_string()))?
                .into_expense()
                .map_err(ApiError::InvalidRequest)?;
            task::spawn_blocking(move || ledger.add_expense(expense))
                .await
                .map_err(|e| ApiError::Internal(e.to_string()))??;
        }
        Some("income") => {
            let income = serde_json::from_value::<NewIncome>(value)
                .map_err(|e| ApiError::InvalidRequest(e.to_string()))?
                .into_income()
                .map_err(ApiError::InvalidRequest)?;
            task::spawn_blocking(move || ledger.add_income(income))
                .await
                .map_err(|e| ApiError::Internal(e.to_string()))??;
        }
        Some(other) => {
            return Err(ApiError::Validation(format!(
                "Unknown transaction type '{}'; expected 'expense' or 'income'",
                other
            )))
        }
        None => {
            return Err(ApiError::Validation(
                "Missing transaction type; expected 'expense' or 'income'".to_string(),
            ))
        }
    }

    tracing::info!(kind = kind.as_deref().unwrap_or_default(), "Transaction recorded");
    Ok(Json(StatusResponse::success()))
}

/// Router fallback: paths that merely start with a known API path are
/// served like the exact path, so `/api/summary/` and `/api/transactions/x`
/// behave as `/api/summary` and `/api/transactions`.
pub async fn route_by_prefix(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let path = uri.path();
    if path.starts_with("/api/transactions") {
        if method == Method::GET {
            return list_transactions(State(state)).await.into_response();
        }
        if method == Method::POST {
            return create_transaction(State(state), body).await.into_response();
        }
    } else if path.starts_with("/api/summary") && method == Method::GET {
        return summary(State(state)).await.into_response();
    }

    not_found().await.into_response()
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain")],
        "404 Not Found",
    )
}
