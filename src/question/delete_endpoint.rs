//! Question deletion endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    question::{QuestionId, db::delete_question},
};

/// The state needed for deleting a question.
#[derive(Debug, Clone)]
pub struct DeleteQuestionState {
    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for DeleteQuestionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle question deletion. Responds with HTTP 204 and an empty body, or
/// 404 when the ID does not match a question.
pub async fn delete_question_endpoint(
    Path(question_id): Path<QuestionId>,
    State(state): State<DeleteQuestionState>,
) -> Result<Response, Error> {
    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    delete_question(question_id, &connection)?;
    tracing::info!("deleted question {question_id}");

    Ok(StatusCode::NO_CONTENT.into_response())
}
