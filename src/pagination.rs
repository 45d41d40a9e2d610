//! This module defines the common functionality for paging the question bank.

/// The number of questions shown on each page of the question list.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Take the one-based `page` of `items` along with the total item count.
///
/// The returned slice starts at index `(page - 1) * page_size` and holds at
/// most `page_size` items, in the order the store returned them. A page that
/// starts at or past the end of `items` is empty, not an error. The count is
/// always the length of the full, unpaged collection.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> (&[T], usize) {
    let total_count = items.len();

    let start = page.saturating_sub(1).saturating_mul(page_size);
    let start = start.min(total_count);
    let end = start.saturating_add(page_size).min(total_count);

    (&items[start..end], total_count)
}
