//! Page slicing.

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Size of the full ordered set, independent of the slice.
    pub total_count: usize,
    pub page: usize,
    pub per_page: usize,
}

/// Slice `[(page - 1) * per_page, page * per_page)` out of `items`.
///
/// An out-of-range page is an empty slice, never an error. `page` and
/// `per_page` below 1 are treated as 1.
#[must_use]
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let page = page.max(1);
    let per_page = per_page.max(1);
    let total_count = items.len();

    let start = (page - 1).saturating_mul(per_page);
    let items = if start >= total_count {
        Vec::new()
    } else {
        items.into_iter().skip(start).take(per_page).collect()
    };

    Page {
        items,
        total_count,
        page,
        per_page,
    }
}
