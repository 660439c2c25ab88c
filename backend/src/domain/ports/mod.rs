//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod course_catalogue;
mod login_service;
mod student_repository;

#[cfg(test)]
pub use course_catalogue::MockCourseCatalogue;
pub use course_catalogue::{CourseCatalogue, CourseCatalogueError, FixtureCourseCatalogue};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{DemoUserDirectory, LoginService};
#[cfg(test)]
pub use student_repository::MockStudentRepository;
pub use student_repository::{
    StudentQuery, StudentRepository, StudentRepositoryError, select_page,
};
