//! Fixed-size page slicing.

/// Returns the 1-based `page` of `items`, `page_size` items wide.
///
/// Out-of-range pages (including page 0) yield an empty slice; whether
/// that is an error is the caller's decision.
pub fn paginate<T>(page: u32, page_size: u32, items: &[T]) -> &[T] {
    let Some(index) = page.checked_sub(1) else {
        return &[];
    };

    let page_size = page_size as usize;
    let start = (index as usize).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
