//! Record store port for student records.
//!
//! Inbound adapters depend on [`StudentRepository`] only. The in-memory and
//! mirrored adapters in `outbound::persistence` implement it, and so could a
//! transactional store without callers noticing.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{Error, NewStudent, Student, StudentId, StudentPatch};

use super::define_port_error;

define_port_error! {
    /// Errors raised by student repository adapters.
    pub enum StudentRepositoryError {
        /// Reading or writing the mirror snapshot failed.
        Mirror { message: String } => "student mirror failed: {message}",
        /// Records could not be converted to or from JSON.
        Serialization { message: String } => "student serialisation failed: {message}",
    }
}

impl From<StudentRepositoryError> for Error {
    fn from(err: StudentRepositoryError) -> Self {
        Error::internal(err.to_string())
    }
}

/// Search and page selection for [`StudentRepository::paginate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentQuery {
    pub page: PageRequest,
    /// Case-insensitive substring; empty matches every record.
    pub search: String,
}

/// Canonical owner of the student list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Every record, in insertion order.
    async fn list(&self) -> Result<Vec<Student>, StudentRepositoryError>;

    /// Filter by [`StudentQuery::search`] then slice out the requested page.
    async fn paginate(&self, query: &StudentQuery) -> Result<Page<Student>, StudentRepositoryError>;

    async fn find_by_id(&self, id: &StudentId) -> Result<Option<Student>, StudentRepositoryError>;

    /// Assign a fresh id, append the record and return the stored copy.
    async fn create(&self, student: NewStudent) -> Result<Student, StudentRepositoryError>;

    /// Merge `patch` over the stored record; `None` when `id` is unknown.
    async fn update(
        &self,
        id: &StudentId,
        patch: StudentPatch,
    ) -> Result<Option<Student>, StudentRepositoryError>;

    /// Remove the record; `false` when `id` is unknown.
    async fn delete(&self, id: &StudentId) -> Result<bool, StudentRepositoryError>;
}

/// Apply a [`StudentQuery`] to a full list.
///
/// Shared by adapters that hold the whole list in memory.
///
/// # Examples
/// ```
/// use student_portal::domain::ports::{select_page, StudentQuery};
///
/// let page = select_page(Vec::new(), &StudentQuery::default());
/// assert_eq!(page.total(), 0);
/// assert_eq!(page.page(), 1);
/// ```
pub fn select_page(students: Vec<Student>, query: &StudentQuery) -> Page<Student> {
    let needle = query.search.to_lowercase();
    let filtered = if needle.is_empty() {
        students
    } else {
        students
            .into_iter()
            .filter(|student| student.matches_search(&needle))
            .collect()
    };
    Page::from_filtered(filtered, query.page)
}
