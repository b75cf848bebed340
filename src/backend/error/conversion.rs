//! Error Conversion
//!
//! `IntoResponse` for [`ApiError`] so handlers can bubble storage failures
//! with `?`. Responses are JSON objects of the form
//! `{"error": "...", "status": <code>}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::ApiError;

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::EmailTaken => StatusCode::CONFLICT,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log server-side failures with their cause; the client only sees
        // the generic message.
        if status.is_server_error() {
            tracing::error!("request failed: {self:?}");
        }

        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_taken_maps_to_conflict() {
        assert_eq!(ApiError::EmailTaken.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn storage_failure_maps_to_server_error() {
        let err = ApiError::from(sqlx::Error::PoolClosed);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn plain_sqlx_error_is_not_a_conflict() {
        let err = ApiError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, ApiError::Database(_)));
    }
}
