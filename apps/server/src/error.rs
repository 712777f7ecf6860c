use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use command_center_core::{ErrorKind, StockDataError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    StockData(#[from] StockDataError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    kind: ErrorKind,
    code: u16,
}

/// HTTP status for each failure kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidTicker => StatusCode::BAD_REQUEST,
        ErrorKind::SymbolNotFound => StatusCode::NOT_FOUND,
        ErrorKind::UpstreamFetch | ErrorKind::Normalization => StatusCode::BAD_GATEWAY,
        ErrorKind::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self {
            ApiError::StockData(e) => (status_for(e.kind), e.kind),
        };
        let body = Json(ErrorBody {
            error: self.to_string(),
            kind,
            code: status.as_u16(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(ErrorKind::InvalidTicker), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorKind::SymbolNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorKind::UpstreamFetch), StatusCode::BAD_GATEWAY);
        assert_eq!(status_for(ErrorKind::Normalization), StatusCode::BAD_GATEWAY);
        assert_eq!(
            status_for(ErrorKind::UpstreamTimeout),
            StatusCode::GATEWAY_TIMEOUT
        );
    }

    #[tokio::test]
    async fn test_error_body() {
        let err = ApiError::from(StockDataError::new(
            "ZZZZ1",
            ErrorKind::SymbolNotFound,
            "Symbol not found: ZZZZ1",
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "error": "Failed to fetch data for ZZZZ1: Symbol not found: ZZZZ1",
                "kind": "symbol_not_found",
                "code": 404
            })
        );
    }
}
