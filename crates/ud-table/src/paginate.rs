use ud_core::User;

/// One visible slice of the filtered+sorted record set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub records: Vec<User>,
    pub total_pages: usize,
}

impl Page {
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            total_pages: 1,
        }
    }
}

/// Slice `records` down to the given 1-based page.
///
/// An empty set still has one (empty) page, so `current_page` always has a
/// valid range `1..=total_pages` to live in. Pages past the end come back
/// empty rather than panicking; callers keep `current_page` in range with
/// [`clamp_page`] whenever the set shrinks.
pub fn paginate(records: &[User], page_size: usize, current_page: usize) -> Page {
    let size = page_size.max(1);
    let total_pages = total_pages(records.len(), size);

    let start = current_page.saturating_sub(1).saturating_mul(size);
    let records = if start >= records.len() {
        Vec::new()
    } else {
        let end = (start + size).min(records.len());
        records[start..end].to_vec()
    };

    Page {
        records,
        total_pages,
    }
}

pub fn total_pages(record_count: usize, page_size: usize) -> usize {
    record_count.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a requested page into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}
