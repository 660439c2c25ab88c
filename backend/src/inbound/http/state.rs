//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CourseCatalogue, LoginService, StudentRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub students: Arc<dyn StudentRepository>,
    pub courses: Arc<dyn CourseCatalogue>,
    pub login: Arc<dyn LoginService>,
}

impl HttpState {
    /// Bundle the port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use student_portal::domain::ports::{DemoUserDirectory, FixtureCourseCatalogue};
    /// use student_portal::inbound::http::state::HttpState;
    /// use student_portal::outbound::persistence::InMemoryStudentRepository;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(InMemoryStudentRepository::default()),
    ///     Arc::new(FixtureCourseCatalogue::default()),
    ///     Arc::new(DemoUserDirectory::default()),
    /// );
    /// let _students = state.students.clone();
    /// ```
    pub fn new(
        students: Arc<dyn StudentRepository>,
        courses: Arc<dyn CourseCatalogue>,
        login: Arc<dyn LoginService>,
    ) -> Self {
        Self {
            students,
            courses,
            login,
        }
    }
}
