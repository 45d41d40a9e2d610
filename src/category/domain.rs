//! Core category domain types.

/// Database identifier for a category.
pub type CategoryId = i64;

/// A labeled grouping for questions (e.g., 'Science', 'Geography').
///
/// Categories are read-only in this API. They are created by seed tooling
/// and never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// The ID assigned by the database.
    pub id: CategoryId,
    /// The display name, serialized as `type` on the wire.
    pub name: String,
}
