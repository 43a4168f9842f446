use api_client::ApiError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use color_eyre::eyre::Error;
use thiserror::Error;
use validator::ValidationErrors;

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
#[derive(Error, Debug)]
pub enum AppError {
    /// 数据验证错误，这种错误通常都是用户参数不正确导致的
    #[error(transparent)]
    ValidationFailed(#[from] ValidationErrors),

    /// 远程源站访问错误
    #[error(transparent)]
    ApiError(#[from] ApiError),

    /// 其他类型错误
    #[error(transparent)]
    InternalError(#[from] Error),
}

/// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ValidationFailed(err) => {
                (StatusCode::BAD_REQUEST, format!("Validate failed: {err}")).into_response()
            }
            AppError::ApiError(err) => match err {
                ApiError::NotFound(url) => (
                    StatusCode::NOT_FOUND,
                    format!("Can not found resource: {url}"),
                )
                    .into_response(),
                ApiError::UpstreamStatus { .. } | ApiError::Request(_) => (
                    StatusCode::BAD_GATEWAY,
                    format!("Upstream error: {err}"),
                )
                    .into_response(),
                ApiError::ConnectionError(msg) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Connection error: {msg}"),
                )
                    .into_response(),
            },
            AppError::InternalError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Something went wrong: {err}"),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = AppError::ApiError(ApiError::not_found("https://api.example.com/projects/x"));
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_upstream_status_maps_to_502() {
        let error = AppError::ApiError(ApiError::upstream_status("https://api.example.com", 500));
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_connection_error_maps_to_500() {
        let error = AppError::ApiError(ApiError::connection("no client"));
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
