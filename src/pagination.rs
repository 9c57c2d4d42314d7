/// Number of questions served per page by every list-style endpoint.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Slice the 1-based `page` out of `items`, `per_page` entries at a time.
///
/// Pages past the end of the data yield an empty slice, never an error.
/// Ordering is the caller's responsibility; results are only reproducible
/// across calls when the input is sorted deterministically.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page
        .saturating_sub(1)
        .saturating_mul(per_page)
        .min(items.len());
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}
