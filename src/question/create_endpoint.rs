//! Question creation endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde_json::json;

use crate::{
    AppState, Error,
    question::{NewQuestion, db::create_question},
};

/// The state needed for creating a question.
#[derive(Debug, Clone)]
pub struct CreateQuestionState {
    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateQuestionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Handle question creation.
///
/// Responds with `{"success": true}` and HTTP 201. The created question is
/// deliberately not echoed back; the client re-fetches the list. A missing or
/// malformed body, or a category ID with no matching category, is an
/// unprocessable-entity error.
pub async fn create_question_endpoint(
    State(state): State<CreateQuestionState>,
    payload: Result<Json<NewQuestion>, JsonRejection>,
) -> Result<Response, Error> {
    let Json(new_question) =
        payload.map_err(|rejection| Error::InvalidQuestionBody(rejection.body_text()))?;

    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    let question = create_question(new_question, &connection)?;
    tracing::info!("created question {}", question.id);

    Ok((StatusCode::CREATED, Json(json!({ "success": true }))).into_response())
}

#[cfg(test)]
mod create_question_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{Router, http::StatusCode, routing::post};
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{
        category::create_category, db::initialize, endpoints, question::get_all_questions,
    };

    use super::{CreateQuestionState, create_question_endpoint};

    fn get_test_state() -> CreateQuestionState {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        initialize(&connection).expect("Could not initialize database");

        let state = CreateQuestionState {
            db_connection: Arc::new(Mutex::new(connection)),
        };

        {
            let connection = state.db_connection.lock().unwrap();
            for name in ["Science", "Art", "Geography"] {
                create_category(name, &connection).expect("Could not create test category");
            }
        }

        state
    }

    fn get_test_server(state: CreateQuestionState) -> TestServer {
        let app = Router::new()
            .route(endpoints::ADD_QUESTION, post(create_question_endpoint))
            .with_state(state);

        TestServer::new(app)
    }

    #[tokio::test]
    async fn create_question_succeeds() {
        let state = get_test_state();
        let server = get_test_server(state.clone());

        let response = server
            .post(endpoints::ADD_QUESTION)
            .json(&json!({
                "question": "this is a test",
                "answer": "test me",
                "category": 3,
                "difficulty": 3,
            }))
            .await;

        response.assert_status(StatusCode::CREATED);

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);
        assert!(
            body.get("question").is_none(),
            "success body must not echo the question"
        );

        let questions = get_all_questions(&state.db_connection.lock().unwrap())
            .expect("Could not get all questions");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "this is a test");
        assert_eq!(questions[0].category, 3);
    }

    #[tokio::test]
    async fn create_question_with_malformed_body_is_unprocessable() {
        let server = get_test_server(get_test_state());

        let response = server
            .post(endpoints::ADD_QUESTION)
            .json(&json!({ "question": "lonely field" }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 422);
    }

    #[tokio::test]
    async fn create_question_with_unknown_category_is_unprocessable() {
        let server = get_test_server(get_test_state());

        let response = server
            .post(endpoints::ADD_QUESTION)
            .json(&json!({
                "question": "this is a test",
                "answer": "test me",
                "category": 42,
                "difficulty": 3,
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}
