//! Endpoint for listing the questions that belong to a single category.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde_json::json;

use crate::{
    AppState, Error,
    category::CategoryId,
    question::{Question, get_all_questions},
};

/// The state needed for listing a category's questions.
#[derive(Debug, Clone)]
pub struct CategoryQuestionsState {
    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CategoryQuestionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle requests for the questions in the category `category_id`.
///
/// There is no existence check on the category: an ID with no matching
/// questions responds with an empty list and HTTP 200, unlike the paginated
/// question list which treats an empty result as not found. The asymmetry is
/// part of the wire contract this API preserves.
pub async fn get_category_questions(
    Path(category_id): Path<CategoryId>,
    State(state): State<CategoryQuestionsState>,
) -> Result<Response, Error> {
    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    let questions = get_all_questions(&connection)?;
    let matches = questions_in_category(&questions, category_id);

    Ok(Json(json!({
        "questions": matches,
        "total_questions": matches.len(),
        "current_category": category_id,
    }))
    .into_response())
}

/// Return every question whose `category` equals `category_id`, in the order
/// the store returned them.
pub(crate) fn questions_in_category(
    questions: &[Question],
    category_id: CategoryId,
) -> Vec<Question> {
    questions
        .iter()
        .filter(|question| question.category == category_id)
        .cloned()
        .collect()
}
