//! A REST API that serves a bank of trivia questions.
//!
//! The API lists categories, paginates and searches questions, adds and
//! deletes questions, and runs a quiz flow that hands out one random unseen
//! question per round.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod category;
mod db;
mod endpoints;
mod pagination;
mod question;
mod quiz;
mod routing;

pub use app_state::AppState;
pub use category::{Category, CategoryId, create_category};
pub use db::initialize as initialize_db;
pub use question::{NewQuestion, Question, QuestionId, create_question};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to delete a question that does not exist.
    #[error("unable to delete question {0}")]
    DeleteMissingQuestion(QuestionId),

    /// The request body for creating a question was missing or malformed.
    #[error("unable to add question: {0}")]
    InvalidQuestionBody(String),

    /// The category ID used to create a question did not match a valid category.
    #[error("the category ID does not refer to a valid category")]
    InvalidCategory,

    /// The search request did not include a `searchTerm` field.
    #[error("missing search term")]
    MissingSearchTerm,

    /// The quiz request was missing a required field.
    ///
    /// The quiz endpoint never surfaces this error to the client. It is kept
    /// distinct from legitimate exhaustion of the question bank so the server
    /// logs can tell the two apart.
    #[error("missing field \"{0}\" in quiz request")]
    MissingQuizField(String),

    /// Could not acquire the database lock.
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 787 occurs when a FOREIGN KEY constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, Some(_)) if sql_error.extended_code == 787 => {
                Error::InvalidCategory
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::NotFound | Error::DeleteMissingQuestion(_) => StatusCode::NOT_FOUND,
            Error::InvalidQuestionBody(_)
            | Error::InvalidCategory
            | Error::MissingSearchTerm
            | Error::MissingQuizField(_) => StatusCode::UNPROCESSABLE_ENTITY,
            // Any errors that are not handled above are not intended to be shown to the client.
            ref error => {
                tracing::error!("An unexpected error occurred: {}", error);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        error_response(status, &self.to_string())
    }
}

/// Build the error body all failing endpoints respond with:
/// `{"success": false, "error": <status>, "message": <text>}`.
fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": message,
        })),
    )
        .into_response()
}
