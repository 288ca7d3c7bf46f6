// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;

use crate::domain::models::payload::ErrorResult;

/// 应用错误类型
///
/// 所有错误都以 `{"erro": "..."}` 的形式返回
#[derive(Debug)]
pub enum AppError {
    /// 数据不存在，返回 404
    NotFound(String),
    /// 处理请求时的内部错误，返回 500
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            AppError::NotFound(message) => message.clone(),
            AppError::Internal(detail) => format!("Erro ao buscar dados: {}", detail),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResult::new(self.message()));
        (self.status(), body).into_response()
    }
}

/// Renders a handler panic as a 500 error body.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "panic".to_string()
    };

    tracing::error!("Handler panicked: {}", detail);
    AppError::Internal(detail).into_response()
}
