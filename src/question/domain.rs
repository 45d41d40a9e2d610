//! Core question domain types.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::category::CategoryId;

/// Database identifier for a question.
pub type QuestionId = i64;

/// A single trivia item with its answer, category, and difficulty.
///
/// Questions are created via the add endpoint and destroyed via the delete
/// endpoint; they are never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The ID assigned by the database.
    pub id: QuestionId,
    /// The question text shown to the player.
    pub question: String,
    /// The accepted answer.
    pub answer: String,
    /// The ID of the category this question belongs to.
    pub category: CategoryId,
    /// How hard the question is, on the client's 1-5 scale.
    pub difficulty: i64,
}

/// The fields required to create a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQuestion {
    /// The question text shown to the player.
    pub question: String,
    /// The accepted answer.
    pub answer: String,
    /// The ID of the category the question belongs to.
    pub category: CategoryId,
    /// How hard the question is, on the client's 1-5 scale.
    pub difficulty: i64,
}

/// The distinct category IDs appearing in `questions`, in ascending order.
///
/// The question list and search responses report this as `current_category`.
pub fn distinct_categories(questions: &[Question]) -> Vec<CategoryId> {
    let categories: BTreeSet<CategoryId> =
        questions.iter().map(|question| question.category).collect();

    categories.into_iter().collect()
}
