//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers should return `Result<T, AppError>`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::forms::FormErrors;
use crate::services::ServiceError;
use crate::services::SellerError;
use crate::services::auth::AuthError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Form validation failed.
    #[error("Validation failed")]
    Validation(FormErrors),

    /// The request body is not JSON the form can be read from.
    #[error("Invalid body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Seller onboarding failed.
    #[error("Seller error: {0}")]
    Seller(#[from] SellerError),

    /// A data service failed.
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Session store failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl From<FormErrors> for AppError {
    fn from(errors: FormErrors) -> Self {
        Self::Validation(errors)
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<FormErrors>,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidBody(rejection) => rejection.status(),
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials | AuthError::AccountNotFound => {
                    StatusCode::UNAUTHORIZED
                }
                AuthError::AccountExists => StatusCode::CONFLICT,
                AuthError::PasswordHash => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Seller(SellerError::AlreadyApplied) => StatusCode::CONFLICT,
            Self::Service(ServiceError::Unavailable(_)) => StatusCode::BAD_GATEWAY,
            Self::Service(ServiceError::Cancelled) => StatusCode::SERVICE_UNAVAILABLE,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the error is captured to Sentry.
    fn is_reported(&self) -> bool {
        self.status().is_server_error()
    }

    /// Client-facing message. Internal details are never exposed.
    fn public_message(&self) -> String {
        match self {
            Self::Validation(_) => "Revisa los campos del formulario".to_string(),
            Self::InvalidBody(_) => "La solicitud no tiene el formato esperado".to_string(),
            Self::Auth(AuthError::InvalidCredentials | AuthError::AccountNotFound) => {
                "Correo o contraseña incorrectos".to_string()
            }
            Self::Auth(AuthError::AccountExists) => {
                "Ya existe una cuenta con este correo".to_string()
            }
            Self::Seller(SellerError::AlreadyApplied) => {
                "Ya enviaste una solicitud de vendedor".to_string()
            }
            Self::Service(_) => "Servicio no disponible, intenta más tarde".to_string(),
            Self::NotFound(what) => format!("No encontrado: {what}"),
            Self::Auth(AuthError::PasswordHash) | Self::Session(_) => {
                "Error interno del servidor".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if self.is_reported() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        if let Self::InvalidBody(rejection) = &self {
            tracing::warn!(error = %rejection.body_text(), "rejected request body");
        }

        let body = ErrorBody {
            error: self.public_message(),
            fields: match self {
                Self::Validation(fields) => Some(fields),
                _ => None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Set the Sentry user context from an account ID.
///
/// Call this after successful authentication to associate errors with users.
pub fn set_sentry_user(user_id: &impl ToString, email: Option<&str>) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user_id.to_string()),
            email: email.map(String::from),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
///
/// Call this on logout to stop associating errors with the user.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}
