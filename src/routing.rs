//! Application router configuration.

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;

use crate::{
    AppState, Error,
    category::{get_categories, get_category_questions},
    endpoints,
    question::{
        create_question_endpoint, delete_question_endpoint, get_questions,
        search_questions_endpoint,
    },
    quiz::post_quizzes,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::CATEGORIES, get(get_categories))
        .route(endpoints::CATEGORY_QUESTIONS, get(get_category_questions))
        .route(
            endpoints::QUESTIONS,
            get(get_questions).post(search_questions_endpoint),
        )
        .route(endpoints::QUESTION, delete(delete_question_endpoint))
        .route(endpoints::ADD_QUESTION, post(create_question_endpoint))
        .route(endpoints::QUIZZES, post(post_quizzes))
        .fallback(get_not_found)
        .layer(cors_layer())
        .with_state(state)
}

/// The CORS policy the browser client relies on: the local dev origin with
/// credentials, and the headers and methods the client sends.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(HeaderValue::from_static("http://localhost:3000"))
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

/// Requests for unknown routes get the standard JSON error body.
async fn get_not_found() -> Response {
    Error::NotFound.into_response()
}
