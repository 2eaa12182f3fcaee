//! Client-side style pagination over an in-memory row set.

use thiserror::Error;

/// Page sizes offered by the pager.
pub const PAGE_SIZES: [usize; 4] = [5, 10, 15, 25];

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Rejected pagination change.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page size {0} is not offered by the pager")]
    UnsupportedPageSize(usize),
    #[error("page {page} is out of range (1..={pages})")]
    PageOutOfRange { page: usize, pages: usize },
}

/// Currently visible slice of the row set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub first_row_index: usize,
    pub page_size: usize,
}

impl PageWindow {
    /// Returns the rows inside the window, clamped to the slice bounds.
    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let start = self.first_row_index.min(rows.len());
        let end = self
            .first_row_index
            .saturating_add(self.page_size)
            .min(rows.len());
        &rows[start..end]
    }

    /// Returns the 1-based page number of the window.
    pub fn page(&self) -> usize {
        self.first_row_index / self.page_size + 1
    }
}

/// Returns number of pages needed to show `total` rows.
///
/// An empty row set still has one (empty) page.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size).max(1)
}

/// Pagination state for a fixed row count.
///
/// Mirrors a pager widget: every change carries a page number and a page
/// size, the offset is recomputed from both, and the size is only replaced
/// when it actually differs.
#[derive(Debug, Clone)]
pub struct Pagination {
    total: usize,
    window: PageWindow,
}

impl Pagination {
    /// Creates pagination showing the first page.
    ///
    /// # Errors
    ///
    /// Returns error if `page_size` is not in [`PAGE_SIZES`].
    pub fn new(total: usize, page_size: usize) -> Result<Self, PaginationError> {
        ensure_supported(page_size)?;
        Ok(Self {
            total,
            window: PageWindow {
                first_row_index: 0,
                page_size,
            },
        })
    }

    /// Applies a pager change.
    ///
    /// Returns `true` if the page size changed.
    ///
    /// # Errors
    ///
    /// Returns error if the size is not offered or the page does not exist
    /// at that size. State is left unchanged on error.
    pub fn on_change(&mut self, page: usize, page_size: usize) -> Result<bool, PaginationError> {
        ensure_supported(page_size)?;

        let pages = page_count(self.total, page_size);
        if page == 0 || page > pages {
            return Err(PaginationError::PageOutOfRange { page, pages });
        }

        let size_changed = page_size != self.window.page_size;
        if size_changed {
            self.window.page_size = page_size;
        }
        self.window.first_row_index = page_size * (page - 1);

        Ok(size_changed)
    }

    pub fn window(&self) -> PageWindow {
        self.window
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn page(&self) -> usize {
        self.window.page()
    }

    pub fn page_count(&self) -> usize {
        page_count(self.total, self.window.page_size)
    }

    /// Returns 1-based inclusive range of visible items, `None` when empty.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        if self.total == 0 {
            return None;
        }
        let start = self.window.first_row_index + 1;
        let end = (self.window.first_row_index + self.window.page_size).min(self.total);
        Some((start, end))
    }

    pub fn has_previous(&self) -> bool {
        self.page() > 1
    }

    pub fn has_next(&self) -> bool {
        self.page() < self.page_count()
    }
}

fn ensure_supported(page_size: usize) -> Result<(), PaginationError> {
    if PAGE_SIZES.contains(&page_size) {
        Ok(())
    } else {
        Err(PaginationError::UnsupportedPageSize(page_size))
    }
}
