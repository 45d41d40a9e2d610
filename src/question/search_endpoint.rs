//! Question search endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    AppState, Error,
    question::{Question, db::get_all_questions, domain::distinct_categories},
};

/// The state needed for searching questions.
#[derive(Debug, Clone)]
pub struct SearchQuestionsState {
    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for SearchQuestionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The body of a search request. The field name follows the client's
/// camel-case convention.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchRequest {
    /// The text to look for within question text.
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Handle question search.
///
/// Responds with every question containing the search term, the match count,
/// and the distinct categories among the matches. A request without a
/// `searchTerm` field is an unprocessable-entity error; an empty term matches
/// the whole bank.
pub async fn search_questions_endpoint(
    State(state): State<SearchQuestionsState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Response, Error> {
    let Json(request) = payload.map_err(|_| Error::MissingSearchTerm)?;
    let term = request.search_term.ok_or(Error::MissingSearchTerm)?;

    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    let questions = get_all_questions(&connection)?;
    let matches = search_questions(&questions, &term);

    Ok(Json(json!({
        "questions": matches,
        "total_questions": matches.len(),
        "current_category": distinct_categories(&matches),
    }))
    .into_response())
}

/// Return every question whose text contains `term` as a case-insensitive
/// substring, in the order the store returned them.
///
/// An empty term matches every question.
pub fn search_questions(questions: &[Question], term: &str) -> Vec<Question> {
    let needle = term.to_lowercase();

    questions
        .iter()
        .filter(|question| question.question.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
