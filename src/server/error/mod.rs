//! Error hierarchy for the HTTP API.
//!
//! Every handler returns `Result<_, AppError>`. `AppError` wraps the domain errors
//! (authentication, configuration, publishing) together with the infrastructure
//! errors bubbling up from SeaORM, tower-sessions and Serenity, and decides the
//! status code and JSON body the admin panel receives.

pub mod auth;
pub mod config;
pub mod publish;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, publish::PublishError},
};

#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed environment variable. Only raised at startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Not logged in, or wrong admin password. Always a 401.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Gateway or REST failure while starting the bot.
    ///
    /// Boxed, `serenity::Error` is large. Publishing failures use `PublishErr`
    /// instead so the operator sees the reason.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// The destination channel rejected or never received a notification.
    ///
    /// `context` is the client-facing message; `source` is returned as `details`.
    #[error("{context}: {source}")]
    PublishErr {
        context: String,
        #[source]
        source: PublishError,
    },

    /// 404 with the given message.
    #[error("{0}")]
    NotFound(String),

    /// 400 with the given message. Raised before anything is published or stored.
    #[error("{0}")]
    BadRequest(String),
}

impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

/// Malformed bodies, wrong content types and mistyped fields all answer 400.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::PublishErr { context, source } => {
                tracing::error!("{}: {}", context, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: context,
                        details: Some(source.to_string()),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Logs the wrapped error and answers with a generic 500 body.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
