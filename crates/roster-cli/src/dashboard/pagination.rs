//! Fixed-size paging over a query result

/// Rows per dashboard page
pub const PAGE_SIZE: usize = 8;

/// One clamped page of a sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number after clamping
    pub page: usize,
    pub total_pages: usize,
    /// 1-based index of the first item, 0 when the sequence is empty
    pub range_start: usize,
    /// 1-based index of the last item, 0 when the sequence is empty
    pub range_end: usize,
    /// Length of the whole sequence
    pub total: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// Number of pages needed for `len` items
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Clamp a requested page into `[1, total_pages]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Slice out `page` (1-based, clamped) of `sequence`
pub fn paginate<T: Clone>(sequence: &[T], page_size: usize, page: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total = sequence.len();
    let total_pages = total_pages(total, page_size);
    let page = clamp_page(page, total_pages);

    let start = ((page - 1) * page_size).min(total);
    let end = (start + page_size).min(total);
    let items = sequence[start..end].to_vec();

    let (range_start, range_end) = if items.is_empty() {
        (0, 0)
    } else {
        (start + 1, end)
    };

    Page {
        items,
        page,
        total_pages,
        range_start,
        range_end,
        total,
    }
}
