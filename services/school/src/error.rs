use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use campus_domain::user::UserRole;

/// School service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum SchoolServiceError {
    #[error("{role} is not allowed to {action}")]
    Forbidden {
        role: UserRole,
        action: &'static str,
    },
    #[error("class not found")]
    ClassNotFound,
    #[error("invalid class: {0}")]
    InvalidClass(&'static str),
    #[error("{field} must not be empty")]
    InvalidMeal { field: &'static str },
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl SchoolServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::ClassNotFound => "CLASS_NOT_FOUND",
            Self::InvalidClass(_) => "INVALID_CLASS",
            Self::InvalidMeal { .. } => "INVALID_MEAL",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::ClassNotFound => StatusCode::NOT_FOUND,
            Self::InvalidClass(_) | Self::InvalidMeal { .. } => StatusCode::BAD_REQUEST,
            Self::InvalidBody(rejection) => rejection.status(),
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SchoolServiceError {
    fn into_response(self) -> Response {
        // 4xx are already recorded by the TraceLayer; only 500s carry a cause worth logging.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (self.status(), axum::Json(body)).into_response()
    }
}
