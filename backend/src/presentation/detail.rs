//! Student detail page model.

use serde::Serialize;

use crate::domain::{Course, Student};

use super::table::GpaBand;

/// A student with the catalogue entries for their enrolments.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetail {
    pub student: Student,
    pub gpa_band: GpaBand,
    pub courses: Vec<Course>,
    pub total_credits: u32,
    pub edit_url: String,
    /// Posting here removes the record.
    pub delete_url: String,
}

impl StudentDetail {
    /// Combine `student` with its resolved `courses`.
    pub fn new(student: Student, courses: Vec<Course>) -> Self {
        Self {
            gpa_band: GpaBand::from_gpa(student.gpa()),
            total_credits: courses.iter().map(Course::credits).sum(),
            edit_url: format!("/students/{}/edit", student.id()),
            delete_url: format!("/students/{}/delete", student.id()),
            student,
            courses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{CourseCatalogue, FixtureCourseCatalogue};
    use crate::domain::{NewStudent, StudentId};

    #[tokio::test]
    async fn credits_sum_over_resolved_courses() {
        let student = Student::from_new(
            StudentId::new("abc1234").expect("id"),
            NewStudent {
                name: "Jane Smith".into(),
                email: "jane@example.com".into(),
                registration_number: "REG-1".into(),
                major: "Mathematics".into(),
                date_of_birth: "2000-01-01".into(),
                gpa: 3.7,
                avatar: None,
                enrolled_courses: vec!["MATH101".into(), "CS101".into()],
            },
        );
        let courses = FixtureCourseCatalogue::default()
            .resolve(student.enrolled_courses())
            .await
            .expect("resolve");

        let detail = StudentDetail::new(student, courses);
        assert_eq!(detail.total_credits, 7);
        assert_eq!(detail.gpa_band, GpaBand::Excellent);
        assert_eq!(detail.edit_url, "/students/abc1234/edit");
        assert_eq!(detail.delete_url, "/students/abc1234/delete");
    }
}
