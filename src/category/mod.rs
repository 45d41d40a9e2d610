//! Categories that group trivia questions.

mod db;
mod domain;
mod list_endpoint;
mod questions_endpoint;

pub use db::{create_category, create_category_table, get_all_categories};
pub use domain::{Category, CategoryId};
pub use list_endpoint::get_categories;
pub(crate) use list_endpoint::category_map;
pub use questions_endpoint::get_category_questions;
