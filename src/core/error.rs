//! 核心错误处理模块

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::app::person::service::StoreError;
use crate::app::user::service::UserError;

/// 核心错误类型
///
/// 响应体是纯文本，内容等于底层错误的描述，不返回结构化错误码。
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InternalServerError(String),
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), "request failed: {}", self);
        } else {
            warn!(status = status.as_u16(), "request rejected: {}", self);
        }

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("{}\n", self),
        )
            .into_response()
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => CoreError::NotFound(err.to_string()),
            StoreError::DataAccess(msg) => CoreError::InternalServerError(msg),
        }
    }
}

impl From<UserError> for CoreError {
    fn from(err: UserError) -> Self {
        // 非数字 id 目前与远程调用失败同样映射为 500
        CoreError::InternalServerError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_split_between_404_and_500() {
        let not_found: CoreError = StoreError::NotFound.into();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let failed: CoreError = StoreError::DataAccess("connection reset".to_string()).into();
        assert_eq!(failed.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(failed.to_string(), "connection reset");
    }

    #[test]
    fn invalid_user_id_is_a_server_error() {
        let err: CoreError = UserError::InvalidId("abc".parse::<i64>().unwrap_err()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
