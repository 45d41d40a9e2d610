//! The trivia question bank: listing, searching, adding, and deleting questions.

mod create_endpoint;
mod db;
mod delete_endpoint;
mod domain;
mod list_endpoint;
mod search_endpoint;

pub use create_endpoint::create_question_endpoint;
pub use db::{create_question, create_question_table, delete_question, get_all_questions};
pub use delete_endpoint::delete_question_endpoint;
pub use domain::{NewQuestion, Question, QuestionId, distinct_categories};
pub use list_endpoint::get_questions;
pub use search_endpoint::{search_questions, search_questions_endpoint};
