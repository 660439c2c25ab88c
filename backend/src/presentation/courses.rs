//! Course cards for the course overview page.

use serde::Serialize;

use crate::domain::Course;

/// Summary card for one catalogue course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseCard {
    pub code: String,
    pub title: String,
    pub instructor: String,
    pub credits: u32,
    pub schedule: Option<String>,
    /// `"<n> students"`.
    pub enrolment: String,
}

impl From<&Course> for CourseCard {
    fn from(course: &Course) -> Self {
        Self {
            code: course.code().to_owned(),
            title: course.title().to_owned(),
            instructor: course.instructor().to_owned(),
            credits: course.credits(),
            schedule: course.schedule().map(str::to_owned),
            enrolment: format!("{} students", course.enrolled_students().len()),
        }
    }
}
