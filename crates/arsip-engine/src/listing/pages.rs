use std::ops::{Range, RangeInclusive};

/// Page arithmetic for a listing of `len` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    window: usize,
}

/// One page of a listing. Pages are numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub current: usize,
    pub total: usize,
    /// Indices of the items shown on this page.
    pub items: Range<usize>,
    /// Page numbers shown around the current one.
    pub window: RangeInclusive<usize>,
    /// Whether a jump to the first page is offered (window starts after 1).
    pub show_first: bool,
    /// Whether a jump to the last page is offered (window ends before `total`).
    pub show_last: bool,
}

impl Pager {
    /// A page size of zero is treated as one.
    pub fn new(page_size: usize, window: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            window,
        }
    }

    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Resolves `page` for a listing of `len` items. Page 0 and pages past
    /// the end fall back to page 1.
    pub fn view(&self, len: usize, page: usize) -> PageView {
        let total = self.page_count(len);
        let current = if page == 0 || page > total { 1 } else { page };

        let start = ((current - 1) * self.page_size).min(len);
        let end = (start + self.page_size).min(len);

        let first_shown = current.saturating_sub(self.window).max(1);
        let last_shown = (current + self.window).min(total);

        PageView {
            current,
            total,
            items: start..end,
            window: first_shown..=last_shown,
            show_first: first_shown > 1,
            show_last: last_shown < total,
        }
    }
}

impl PageView {
    /// The items of `all` that fall on this page.
    pub fn slice<'a, T>(&self, all: &'a [T]) -> &'a [T] {
        &all[self.items.start.min(all.len())..self.items.end.min(all.len())]
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Next page number, if any.
    pub fn next(&self) -> Option<usize> {
        (self.current < self.total).then_some(self.current + 1)
    }

    /// Previous page number, if any.
    pub fn previous(&self) -> Option<usize> {
        (self.current > 1).then_some(self.current - 1)
    }
}
