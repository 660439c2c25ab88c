//! Pager control geometry: which page numbers to show and which items a
//! page covers.

use serde::Serialize;

/// Most page-number buttons a pager shows at once.
pub const MAX_WINDOW_PAGES: usize = 5;

/// Page sizes offered by the pager's size selector.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 50];

/// Sliding window of page numbers around the current page.
///
/// Near either end the window is pinned to that end; in the middle it is
/// centred on the current page.
///
/// # Examples
/// ```
/// use pagination::PageWindow;
///
/// let window = PageWindow::new(6, 10);
/// assert_eq!(window.pages(), &[4, 5, 6, 7, 8]);
/// assert!(window.has_previous());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    current: usize,
    total_pages: usize,
    pages: Vec<usize>,
}

impl PageWindow {
    /// Compute the window for `current` out of `total_pages`.
    #[must_use]
    pub fn new(current: usize, total_pages: usize) -> Self {
        let len = total_pages.min(MAX_WINDOW_PAGES);
        let start = if total_pages <= MAX_WINDOW_PAGES || current <= 3 {
            1
        } else if current >= total_pages - 2 {
            total_pages - (MAX_WINDOW_PAGES - 1)
        } else {
            current - 2
        };
        Self {
            current,
            total_pages,
            pages: (start..start + len).collect(),
        }
    }

    /// Page numbers to render, ascending.
    #[must_use]
    pub fn pages(&self) -> &[usize] {
        &self.pages
    }

    /// Currently selected page.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Whether the "previous" control is enabled.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current > 1
    }

    /// Whether the "next" control is enabled.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.total_pages > 0 && self.current < self.total_pages
    }

    /// Target of the "previous" control, never below 1.
    #[must_use]
    pub fn previous(&self) -> usize {
        self.current.saturating_sub(1).max(1)
    }

    /// Target of the "next" control, never beyond the last page.
    #[must_use]
    pub fn next(&self) -> usize {
        (self.current + 1).min(self.total_pages.max(1))
    }
}

/// "Showing `first` to `last` of `total` results".
///
/// `first` is zero when there are no results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowingRange {
    first: usize,
    last: usize,
    total: usize,
}

impl ShowingRange {
    /// Describe the items covered by `page` when pages hold `limit` items.
    ///
    /// # Examples
    /// ```
    /// use pagination::ShowingRange;
    ///
    /// let range = ShowingRange::new(3, 10, 23);
    /// assert_eq!((range.first(), range.last()), (21, 23));
    /// ```
    #[must_use]
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let end = page.saturating_mul(limit);
        let first = if total > 0 {
            end.saturating_sub(limit) + 1
        } else {
            0
        };
        Self {
            first,
            last: end.min(total),
            total,
        }
    }

    /// 1-based index of the first item shown.
    #[must_use]
    pub const fn first(&self) -> usize {
        self.first
    }

    /// 1-based index of the last item shown.
    #[must_use]
    pub const fn last(&self) -> usize {
        self.last
    }

    /// Number of results across every page.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 0, &[])]
    #[case(1, 3, &[1, 2, 3])]
    #[case(2, 5, &[1, 2, 3, 4, 5])]
    #[case(3, 10, &[1, 2, 3, 4, 5])]
    #[case(4, 10, &[2, 3, 4, 5, 6])]
    #[case(8, 10, &[6, 7, 8, 9, 10])]
    #[case(10, 10, &[6, 7, 8, 9, 10])]
    #[case(7, 10, &[5, 6, 7, 8, 9])]
    fn window_pins_and_centres(
        #[case] current: usize,
        #[case] total_pages: usize,
        #[case] expected: &[usize],
    ) {
        assert_eq!(PageWindow::new(current, total_pages).pages(), expected);
    }

    #[rstest]
    fn controls_disable_at_edges() {
        let first = PageWindow::new(1, 4);
        assert!(!first.has_previous());
        assert!(first.has_next());
        assert_eq!(first.previous(), 1);

        let last = PageWindow::new(4, 4);
        assert!(last.has_previous());
        assert!(!last.has_next());
        assert_eq!(last.next(), 4);

        let empty = PageWindow::new(1, 0);
        assert!(!empty.has_next());
        assert_eq!(empty.next(), 1);
    }

    #[rstest]
    #[case(1, 10, 0, 0, 0)]
    #[case(1, 10, 7, 1, 7)]
    #[case(2, 10, 23, 11, 20)]
    #[case(3, 10, 23, 21, 23)]
    #[case(1, 5, 5, 1, 5)]
    fn showing_range_bounds(
        #[case] page: usize,
        #[case] limit: usize,
        #[case] total: usize,
        #[case] first: usize,
        #[case] last: usize,
    ) {
        let range = ShowingRange::new(page, limit, total);
        assert_eq!((range.first(), range.last(), range.total()), (first, last, total));
    }
}
