//! View models for the portal's pages.
//!
//! Page handlers build these from domain records and return them as JSON,
//! so rendering rules (column layout, GPA bands, pager windows, form
//! messages) are plain functions with unit tests.

pub mod courses;
pub mod dashboard;
pub mod detail;
pub mod forms;
pub mod pager;
pub mod table;

pub use courses::CourseCard;
pub use dashboard::{ACTIVE_SEMESTER, DashboardSummary, StatCard};
pub use detail::StudentDetail;
pub use forms::{FormErrors, StudentForm};
pub use pager::Pager;
pub use table::{Align, Cell, GpaBand, StudentColumn, StudentTable};
