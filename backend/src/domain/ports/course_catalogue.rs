//! Read-only course catalogue port and its seeded fixture.

use async_trait::async_trait;

use crate::domain::{Course, CourseDraft, Error};

use super::define_port_error;

define_port_error! {
    /// Errors raised by course catalogue adapters.
    pub enum CourseCatalogueError {
        /// The catalogue source could not be read.
        Unavailable { message: String } => "course catalogue unavailable: {message}",
    }
}

impl From<CourseCatalogueError> for Error {
    fn from(err: CourseCatalogueError) -> Self {
        match err {
            CourseCatalogueError::Unavailable { message } => Error::internal(message),
        }
    }
}

/// Source of course reference data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseCatalogue: Send + Sync {
    /// Every course, in catalogue order.
    async fn list(&self) -> Result<Vec<Course>, CourseCatalogueError>;

    /// Course whose code matches exactly.
    async fn find(&self, code: &str) -> Result<Option<Course>, CourseCatalogueError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|course| course.code() == code))
    }

    /// Courses for `codes`, in the order given; unknown codes are skipped.
    async fn resolve(&self, codes: &[String]) -> Result<Vec<Course>, CourseCatalogueError> {
        let catalogue = self.list().await?;
        Ok(codes
            .iter()
            .filter_map(|code| catalogue.iter().find(|course| course.code() == code))
            .cloned()
            .collect())
    }
}

/// Static catalogue seeded with the introductory courses.
#[derive(Debug, Clone)]
pub struct FixtureCourseCatalogue {
    courses: Vec<Course>,
}

impl Default for FixtureCourseCatalogue {
    fn default() -> Self {
        Self {
            courses: seed_courses(),
        }
    }
}

#[async_trait]
impl CourseCatalogue for FixtureCourseCatalogue {
    async fn list(&self) -> Result<Vec<Course>, CourseCatalogueError> {
        Ok(self.courses.clone())
    }
}

fn seed_courses() -> Vec<Course> {
    [
        CourseDraft {
            code: "CS101",
            title: "Introduction to Computer Science",
            instructor: "Dr. Alan Turing",
            description: "Fundamentals of computer science and programming concepts.",
            credits: 3,
            schedule: Some("Mon, Wed 10:00 - 11:30 AM"),
            enrolled_students: &["1"],
        },
        CourseDraft {
            code: "CS201",
            title: "Data Structures and Algorithms",
            instructor: "Dr. Ada Lovelace",
            description: "Advanced programming concepts focusing on data structures and algorithms.",
            credits: 4,
            schedule: Some("Tue, Thu 1:00 - 2:30 PM"),
            enrolled_students: &["1"],
        },
        CourseDraft {
            code: "BIO101",
            title: "Introduction to Biology",
            instructor: "Dr. Charles Darwin",
            description: "Basic principles of biology and life sciences.",
            credits: 3,
            schedule: Some("Mon, Wed 1:00 - 2:30 PM"),
            enrolled_students: &["2"],
        },
        CourseDraft {
            code: "MATH101",
            title: "Calculus I",
            instructor: "Dr. Isaac Newton",
            description: "Introduction to differential and integral calculus.",
            credits: 4,
            schedule: Some("Mon, Wed, Fri 9:00 - 10:00 AM"),
            enrolled_students: &["1", "5"],
        },
        CourseDraft {
            code: "BUS101",
            title: "Introduction to Business",
            instructor: "Dr. Peter Drucker",
            description: "Overview of business principles and practices.",
            credits: 3,
            schedule: Some("Tue, Thu 10:00 - 11:30 AM"),
            enrolled_students: &["3"],
        },
    ]
    .into_iter()
    .map(Course::new)
    .collect()
}
