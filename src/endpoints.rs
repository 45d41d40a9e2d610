//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/questions/{question_id}', use [format_endpoint].

/// The route for listing all categories.
pub const CATEGORIES: &str = "/categories";
/// The route for listing the questions in a single category.
pub const CATEGORY_QUESTIONS: &str = "/categories/{category_id}/questions";
/// The route for the paginated question list (GET) and question search (POST).
pub const QUESTIONS: &str = "/questions";
/// The route for deleting a single question.
pub const QUESTION: &str = "/questions/{question_id}";
/// The route for adding a question.
pub const ADD_QUESTION: &str = "/questions/add";
/// The route for requesting the next quiz question.
pub const QUIZZES: &str = "/quizzes";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/questions/{question_id}',
/// '{question_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
