//! Deterministic pagination
//!
//! `paginate` slices an already-filtered sequence into fixed-size pages and
//! reports the page count; `page_marks` computes the compact page-index row
//! (first, last, a window around the current page, ellipsis gaps) used by the
//! presentation layer.

/// Default number of scenarios per page
pub const DEFAULT_PAGE_SIZE: usize = 30;

/// One visible page of a sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// The visible slice; empty when the page is out of range
    pub items: &'a [T],
    /// Total page count: `ceil(len / page_size)`, 0 for an empty sequence
    pub total_pages: usize,
    /// The requested page number
    pub number: usize,
}

/// Slice a sequence into its `page_number`-th page (1-based)
///
/// The slice is the half-open range `[(n-1)*size, n*size)`. Out-of-range page
/// numbers yield an empty slice rather than an error; clamping is the
/// caller's job ([`crate::session::Session`] resets to page 1 whenever the
/// filter changes).
#[must_use]
pub fn paginate<T>(items: &[T], page_size: usize, page_number: usize) -> Page<'_, T> {
    let total_pages = if page_size == 0 {
        0
    } else {
        items.len().div_ceil(page_size)
    };

    let start = page_number
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(items.len());
    let end = (start + page_size).min(items.len());

    Page {
        items: &items[start..end],
        total_pages,
        number: page_number,
    }
}

/// One entry in the rendered page-index row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMark {
    /// A numbered, selectable page
    Page(usize),
    /// A collapsed run of hidden pages
    Gap,
}

/// Compute the page-index row for the current position
///
/// Shows page 1, the last page, and every page within distance 2 of the
/// current page; each hidden run collapses into a single [`PageMark::Gap`]
/// emitted at distance 3 from the current page. Empty when there is at most
/// one page, since no controls are shown then.
#[must_use]
pub fn page_marks(current: usize, total_pages: usize) -> Vec<PageMark> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let mut marks = Vec::new();
    for page in 1..=total_pages {
        if page == 1 || page == total_pages || page.abs_diff(current) <= 2 {
            marks.push(PageMark::Page(page));
        } else if page + 3 == current || page == current + 3 {
            marks.push(PageMark::Gap);
        }
    }
    marks
}
