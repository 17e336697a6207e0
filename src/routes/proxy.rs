use axum::{extract::State, Json};

use super::AppState;
use crate::error::AppError;
use crate::proxy::{ApiRequest, ApiResponse};

pub async fn execute(
    State(state): State<AppState>,
    Json(request): Json<ApiRequest>,
) -> Result<Json<ApiResponse>, AppError> {
    tracing::debug!(
        method = %request.method,
        url = %request.url,
        "Proxying request"
    );

    match state.proxy.execute(request).await {
        Ok(response) => {
            tracing::debug!(status = response.status_code, "Request succeeded");
            Ok(Json(response))
        }
        Err(error) => {
            tracing::warn!(code = error.code(), message = %error, "Request failed");
            Err(error)
        }
    }
}
