//! The quiz endpoint: one random unseen question per round.

use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

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
    category::CategoryId,
    question::{Question, QuestionId, get_all_questions},
    quiz::selector::{CategoryFilter, next_question},
};

/// The state needed for drawing quiz questions.
#[derive(Debug, Clone)]
pub struct QuizState {
    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for QuizState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The body of a quiz request.
///
/// Both fields are required; they are optional here so their absence can be
/// reported as a distinct validation error instead of an extractor rejection.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuizRequest {
    /// The IDs of the questions already shown this round.
    pub previous_questions: Option<Vec<QuestionId>>,
    /// The category to draw from, with ID 0 meaning all categories.
    pub quiz_category: Option<QuizCategory>,
}

/// The category part of a quiz request. Clients also send a `type` field
/// alongside the ID, which is ignored.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuizCategory {
    /// The category ID, with 0 as the all-categories sentinel.
    pub id: CategoryId,
}

/// Handle a quiz round: respond with `{"question": <question>}` or, once the
/// eligible questions are exhausted, `{"question": false}`.
///
/// Malformed input and internal faults are collapsed into the same
/// `{"question": false}` response so the client never sees a hard failure
/// mid-quiz. The conditions stay distinguishable in the server logs.
pub async fn post_quizzes(
    State(state): State<QuizState>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Response {
    match draw_question(&state, payload) {
        Ok(Some(question)) => Json(json!({ "question": question })).into_response(),
        Ok(None) => Json(json!({ "question": false })).into_response(),
        Err(error) => {
            tracing::warn!("quiz selection failed: {error}");
            Json(json!({ "question": false })).into_response()
        }
    }
}

fn draw_question(
    state: &QuizState,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Option<Question>, Error> {
    let Json(request) =
        payload.map_err(|rejection| Error::MissingQuizField(rejection.body_text()))?;

    let previous_questions = request
        .previous_questions
        .ok_or_else(|| Error::MissingQuizField("previous_questions".to_string()))?;
    let quiz_category = request
        .quiz_category
        .ok_or_else(|| Error::MissingQuizField("quiz_category".to_string()))?;

    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    let questions = get_all_questions(&connection)?;
    let excluded: HashSet<QuestionId> = previous_questions.into_iter().collect();
    let filter = CategoryFilter::from(quiz_category.id);

    let drawn = next_question(&questions, &excluded, filter, &mut rand::thread_rng());

    Ok(drawn.cloned())
}

#[cfg(test)]
mod post_quizzes_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{Router, routing::post};
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{
        NewQuestion, category::create_category, db::initialize, endpoints,
        question::create_question,
    };

    use super::{QuizState, post_quizzes};

    /// Seeds two categories and five questions whose IDs are 16 through 20,
    /// with 16, 17, and 18 in category 2.
    fn get_test_state() -> QuizState {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        initialize(&connection).expect("Could not initialize database");

        let state = QuizState {
            db_connection: Arc::new(Mutex::new(connection)),
        };

        {
            let connection = state.db_connection.lock().unwrap();
            create_category("Science", &connection).expect("Could not create test category");
            create_category("Art", &connection).expect("Could not create test category");

            for (id, category) in [(16, 2), (17, 2), (18, 2), (19, 1), (20, 1)] {
                connection
                    .execute(
                        "INSERT INTO question (id, question, answer, category, difficulty) \
                        VALUES (?1, ?2, ?3, ?4, ?5)",
                        (
                            id,
                            format!("question #{id}"),
                            format!("answer #{id}"),
                            category,
                            2,
                        ),
                    )
                    .expect("Could not create test question");
            }
        }

        state
    }

    fn get_test_server(state: QuizState) -> TestServer {
        let app = Router::new()
            .route(endpoints::QUIZZES, post(post_quizzes))
            .with_state(state);

        TestServer::new(app)
    }

    #[tokio::test]
    async fn draws_an_unseen_question_from_the_requested_category() {
        let server = get_test_server(get_test_state());

        let response = server
            .post(endpoints::QUIZZES)
            .json(&json!({
                "previous_questions": [16, 17],
                "quiz_category": { "type": "Art", "id": 2 },
            }))
            .await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        let question = &body["question"];

        assert_eq!(question["id"], 18);
        assert_eq!(question["category"], 2);
        assert!(question["answer"].is_string());
        assert!(question["difficulty"].is_i64());
    }

    #[tokio::test]
    async fn all_categories_sentinel_draws_from_the_whole_bank() {
        let server = get_test_server(get_test_state());

        let response = server
            .post(endpoints::QUIZZES)
            .json(&json!({
                "previous_questions": [16, 17, 18, 19],
                "quiz_category": { "type": "click", "id": 0 },
            }))
            .await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["question"]["id"], 20);
    }

    #[tokio::test]
    async fn exhausted_category_ends_the_round() {
        let server = get_test_server(get_test_state());

        let response = server
            .post(endpoints::QUIZZES)
            .json(&json!({
                "previous_questions": [16, 17, 18],
                "quiz_category": { "type": "Art", "id": 2 },
            }))
            .await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["question"], false);
    }

    #[tokio::test]
    async fn malformed_request_is_reported_as_no_question() {
        let server = get_test_server(get_test_state());

        let response = server
            .post(endpoints::QUIZZES)
            .json(&json!({ "previous_questions": [16] }))
            .await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["question"], false);
    }
}
