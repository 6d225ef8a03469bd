use std::ops::{Range, RangeInclusive};

/// How many products a page shows unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// The current page of a fixed-size paginated list.
///
/// Pages are 1-based. The page is always kept within `1..=max(1, page_count)` for the
/// list length it was last clamped against, so a stale page number can never select
/// past the end of a list that shrank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    /// A pager on page 1. A page size of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(total / page_size)`; zero for an empty list.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// The page numbers to draw buttons for.
    pub fn pages(&self, total: usize) -> RangeInclusive<usize> {
        1..=self.page_count(total)
    }

    /// Moves to `page`, clamped into the valid range for a list of `total` items.
    pub fn go_to(&mut self, page: usize, total: usize) {
        let last = self.page_count(total).max(1);
        self.page = page.clamp(1, last);
    }

    /// Pulls the current page back into range after the list length changed.
    pub fn clamp(&mut self, total: usize) {
        self.go_to(self.page, total);
    }

    /// The index range of the current page within a list of `total` items.
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    /// The items on the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }
}
