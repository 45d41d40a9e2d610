//! The quiz flow: drawing one random unseen question per round.

mod endpoint;
mod selector;

pub use endpoint::post_quizzes;
pub use selector::{ALL_CATEGORIES_ID, CategoryFilter, next_question};
