use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{paths, templates};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input.")]
    InvalidInput,

    #[error("Invalid username or password.")]
    InvalidCredentials,

    #[error("Page Not Found")]
    NotFound,

    #[error("Please log in to access this page.")]
    Unauthorized,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Internal(anyhow::Error::new(err))
    }
}

impl From<tower_sessions::session::Error> for AppError {
    fn from(err: tower_sessions::session::Error) -> Self {
        Self::Internal(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(anyhow::Error::new(err))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Internal(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => {
                (StatusCode::NOT_FOUND, Html(templates::not_found_page())).into_response()
            },
            Self::Unauthorized => Redirect::to(paths::LOGIN).into_response(),
            Self::InvalidInput | Self::InvalidCredentials => {
                (StatusCode::BAD_REQUEST, Html(templates::error_page(self.to_string())))
                    .into_response()
            },
            Self::Internal(err) => {
                tracing::error!(error = ?err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(templates::error_page("Something went wrong.".to_string())),
                )
                    .into_response()
            },
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
