//! The paginated question list endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde::Deserialize;
use serde_json::json;

use crate::{
    AppState, Error,
    category::{category_map, get_all_categories},
    pagination::{QUESTIONS_PER_PAGE, paginate},
    question::{distinct_categories, get_all_questions},
};

/// The state needed for the paginated question list.
#[derive(Debug, Clone)]
pub struct ListQuestionsState {
    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ListQuestionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The query parameters for the question list.
#[derive(Debug, Deserialize)]
pub struct ListQuestionsParams {
    /// The one-based page number. Defaults to the first page.
    pub page: Option<usize>,
}

/// Handle requests for a page of the question bank.
///
/// Responds with the page's questions, the total question count, the full
/// category map, and the distinct categories present in the bank. An empty
/// question bank or an empty category table is a not-found error; a page
/// number past the end is an empty page, not an error.
pub async fn get_questions(
    State(state): State<ListQuestionsState>,
    Query(params): Query<ListQuestionsParams>,
) -> Result<Response, Error> {
    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    let questions = get_all_questions(&connection)?;
    let categories = get_all_categories(&connection)?;

    if questions.is_empty() || categories.is_empty() {
        return Err(Error::NotFound);
    }

    let page = params.page.unwrap_or(1);
    let (page_items, total_count) = paginate(&questions, page, QUESTIONS_PER_PAGE);

    Ok(Json(json!({
        "questions": page_items,
        "total_questions": total_count,
        "categories": category_map(&categories),
        "current_category": distinct_categories(&questions),
    }))
    .into_response())
}
