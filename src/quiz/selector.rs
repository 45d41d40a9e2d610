//! Random selection of the next unseen quiz question.

use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};

use crate::{
    category::CategoryId,
    question::{Question, QuestionId},
};

/// The category ID clients send to play across all categories.
pub const ALL_CATEGORIES_ID: CategoryId = 0;

/// The category restriction applied when drawing a quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Draw from the whole question bank.
    All,
    /// Draw only from questions in the given category.
    Category(CategoryId),
}

impl From<CategoryId> for CategoryFilter {
    fn from(id: CategoryId) -> Self {
        if id == ALL_CATEGORIES_ID {
            Self::All
        } else {
            Self::Category(id)
        }
    }
}

/// Choose the next quiz question uniformly at random from the questions that
/// are not in `excluded` and that match `filter`.
///
/// Returns [None] once every matching question has been excluded, which the
/// quiz flow uses to end the round. Exhaustion is not an error.
pub fn next_question<'a, R: Rng + ?Sized>(
    questions: &'a [Question],
    excluded: &HashSet<QuestionId>,
    filter: CategoryFilter,
    rng: &mut R,
) -> Option<&'a Question> {
    let eligible: Vec<&Question> = questions
        .iter()
        .filter(|question| !excluded.contains(&question.id))
        .filter(|question| match filter {
            CategoryFilter::All => true,
            CategoryFilter::Category(id) => question.category == id,
        })
        .collect();

    eligible.choose(rng).copied()
}
