//! Offset pagination primitives for the student portal backend.
//!
//! - [`PageRequest`] validates a 1-based page number and a page size.
//! - [`Page`] slices an already filtered result set and reports totals.
//! - [`PageWindow`] and [`ShowingRange`] describe what a pager control shows.
//!
//! The crate is transport agnostic: HTTP adapters parse query strings into a
//! [`PageRequest`] and map a [`Page`] into whatever envelope they expose.

mod page;
mod request;
mod window;

pub use page::Page;
pub use request::{DEFAULT_LIMIT, DEFAULT_PAGE, PageRequest, PageRequestError};
pub use window::{MAX_WINDOW_PAGES, PAGE_SIZE_OPTIONS, PageWindow, ShowingRange};
