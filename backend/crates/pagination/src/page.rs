//! Page envelope built from a filtered result set.

use serde::Serialize;

use crate::PageRequest;

/// One page of results together with the totals a pager needs.
///
/// ## Invariants
/// - `total_pages == ceil(total / limit)`.
/// - `page` lies in `1..=max(total_pages, 1)`.
/// - `items.len() <= limit`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    items: Vec<T>,
    total: usize,
    page: usize,
    total_pages: usize,
}

impl<T> Page<T> {
    /// Slice the requested page out of an already filtered result set.
    ///
    /// Out-of-range page numbers are clamped to the last page, so asking for
    /// page 9 of a three page result returns page 3.
    ///
    /// # Examples
    /// ```
    /// use pagination::{Page, PageRequest};
    ///
    /// let request = PageRequest::new(9, 2).expect("valid request");
    /// let page = Page::from_filtered(vec![1, 2, 3, 4, 5], request);
    /// assert_eq!(page.page(), 3);
    /// assert_eq!(page.items(), &[5]);
    /// assert_eq!(page.total_pages(), 3);
    /// ```
    #[must_use]
    pub fn from_filtered(filtered: Vec<T>, request: PageRequest) -> Self {
        let limit = request.limit();
        let total = filtered.len();
        let total_pages = total.div_ceil(limit);
        let page = request.page().clamp(1, total_pages.max(1));
        let start = (page - 1).saturating_mul(limit);
        let items = filtered.into_iter().skip(start).take(limit).collect();
        Self {
            items,
            total,
            page,
            total_pages,
        }
    }

    /// Items on this page, in the order of the filtered input.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items across every page.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Effective page number after clamping.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Number of pages; zero when the result set is empty.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Consume the page and return its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Transform every item while keeping the totals.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn numbers(count: usize) -> Vec<usize> {
        (0..count).collect()
    }

    #[rstest]
    #[case(0, 10, 0)]
    #[case(1, 10, 1)]
    #[case(10, 10, 1)]
    #[case(11, 10, 2)]
    #[case(25, 5, 5)]
    #[case(26, 5, 6)]
    fn total_pages_is_ceiling(#[case] total: usize, #[case] limit: usize, #[case] pages: usize) {
        let request = PageRequest::new(1, limit).expect("valid request");
        let page = Page::from_filtered(numbers(total), request);
        assert_eq!(page.total(), total);
        assert_eq!(page.total_pages(), pages);
    }

    #[rstest]
    #[case(23, 10, 1, 10)]
    #[case(23, 10, 2, 10)]
    #[case(23, 10, 3, 3)]
    #[case(20, 10, 2, 10)]
    fn slice_length_matches_remaining_items(
        #[case] total: usize,
        #[case] limit: usize,
        #[case] requested: usize,
        #[case] expected_len: usize,
    ) {
        let request = PageRequest::new(requested, limit).expect("valid request");
        let page = Page::from_filtered(numbers(total), request);
        assert_eq!(page.items().len(), expected_len);
        assert_eq!(page.items().first(), Some(&((requested - 1) * limit)));
    }

    #[rstest]
    fn empty_result_stays_on_page_one() {
        let request = PageRequest::new(4, 10).expect("valid request");
        let page = Page::<usize>::from_filtered(Vec::new(), request);
        assert_eq!(page.page(), 1);
        assert_eq!(page.total_pages(), 0);
        assert!(page.items().is_empty());
    }

    #[rstest]
    fn page_beyond_end_is_clamped_to_last() {
        let request = PageRequest::new(50, 4).expect("valid request");
        let page = Page::from_filtered(numbers(10), request);
        assert_eq!(page.page(), 3);
        assert_eq!(page.items(), &[8, 9]);
    }

    #[rstest]
    fn map_keeps_totals() {
        let request = PageRequest::new(2, 2).expect("valid request");
        let page = Page::from_filtered(numbers(5), request).map(|n| n * 10);
        assert_eq!(page.items(), &[20, 30]);
        assert_eq!((page.total(), page.page(), page.total_pages()), (5, 2, 3));
    }

    #[rstest]
    fn serialises_camel_case_totals() {
        let page = Page::from_filtered(numbers(3), PageRequest::default());
        let value = serde_json::to_value(&page).expect("serialise page");
        assert_eq!(value["totalPages"], 1);
        assert!(value.get("total_pages").is_none());
    }
}
