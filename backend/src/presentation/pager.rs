//! Pager shown under the student table.

use pagination::{PAGE_SIZE_OPTIONS, Page, PageWindow, ShowingRange};
use serde::Serialize;

/// Page links, the "showing x to y of z" line and the page size picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pager {
    pub window: PageWindow,
    pub showing: ShowingRange,
    /// Target of the "previous" control; `None` on the first page.
    pub previous: Option<usize>,
    /// Target of the "next" control; `None` on the last page.
    pub next: Option<usize>,
    pub limit: usize,
    pub page_size_options: [usize; 4],
}

impl Pager {
    /// Pager for `page`, which was cut with `limit` items per page.
    ///
    /// # Examples
    /// ```
    /// use pagination::{Page, PageRequest};
    /// use student_portal::presentation::Pager;
    ///
    /// let page = Page::from_filtered((1..=23).collect(), PageRequest::new(3, 10).expect("valid"));
    /// let pager = Pager::for_page(&page, 10);
    /// assert_eq!(pager.window.pages(), &[1, 2, 3]);
    /// assert_eq!((pager.showing.first(), pager.showing.last()), (21, 23));
    /// ```
    pub fn for_page<T>(page: &Page<T>, limit: usize) -> Self {
        let window = PageWindow::new(page.page(), page.total_pages());
        Self {
            previous: window.has_previous().then(|| window.previous()),
            next: window.has_next().then(|| window.next()),
            showing: ShowingRange::new(page.page(), limit, page.total()),
            window,
            limit,
            page_size_options: PAGE_SIZE_OPTIONS,
        }
    }
}
