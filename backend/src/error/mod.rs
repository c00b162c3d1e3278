mod temporal;

pub use temporal::TemporalError;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Envelope returned by every webhook endpoint on failure.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Validation(Vec<String>),
    Internal {
        context: &'static str,
        source: anyhow::Error,
    },
}

impl AppError {
    /// Wraps an unexpected failure, prefixing the message with `context`.
    pub fn internal(context: &'static str, source: impl Into<anyhow::Error>) -> Self {
        AppError::Internal {
            context,
            source: source.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest(msg) => msg,
            AppError::Validation(errors) => format!("Dados inválidos: {}", errors.join(", ")),
            AppError::Internal { context, source } => {
                tracing::error!(context, error = ?source, "Internal server error");
                format!("{}: {}", context, source)
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            message,
        });

        (status, body).into_response()
    }
}

impl From<TemporalError> for AppError {
    fn from(err: TemporalError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!(
            "Corpo da requisição inválido: {}",
            rejection.body_text()
        ))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let code = e.code.as_ref();
                    format!("{}: {}", field, code)
                })
            })
            .collect();
        messages.sort();
        AppError::Validation(messages)
    }
}

/// Failure of the `/test` smoke endpoint, which reports with its own envelope.
#[derive(Debug)]
pub struct SmokeTestError(pub anyhow::Error);

#[derive(Debug, Serialize, ToSchema)]
pub struct SmokeTestErrorResponse {
    pub status: String,
    pub message: String,
}

impl IntoResponse for SmokeTestError {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self.0, "Smoke test failed");
        let body = Json(SmokeTestErrorResponse {
            status: "error".to_string(),
            message: self.0.to_string(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

impl From<anyhow::Error> for SmokeTestError {
    fn from(err: anyhow::Error) -> Self {
        SmokeTestError(err)
    }
}
