//! Dashboard summary and stat cards.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Student;

/// Label of the semester currently in session.
pub const ACTIVE_SEMESTER: &str = "Spring 2025";

/// Totals shown on the dashboard and returned by `GET /api/v1/dashboard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_students: usize,
    pub total_courses: usize,
    /// Mean GPA with two decimals; `"0.00"` when there are no students.
    #[schema(example = "3.42")]
    pub average_gpa: String,
}

impl DashboardSummary {
    /// Summarise `students` alongside the catalogue size.
    ///
    /// # Examples
    /// ```
    /// use student_portal::presentation::DashboardSummary;
    ///
    /// let summary = DashboardSummary::from_records(&[], 5);
    /// assert_eq!(summary.average_gpa, "0.00");
    /// assert_eq!(summary.total_courses, 5);
    /// ```
    pub fn from_records(students: &[Student], total_courses: usize) -> Self {
        Self {
            total_students: students.len(),
            total_courses,
            average_gpa: average_gpa(students),
        }
    }

    /// Cards in display order.
    pub fn stat_cards(&self) -> Vec<StatCard> {
        vec![
            StatCard::new("Total Students", self.total_students.to_string()),
            StatCard::new("Total Courses", self.total_courses.to_string()),
            StatCard::new("Average GPA", self.average_gpa.clone()),
            StatCard::new("Active Semesters", ACTIVE_SEMESTER.to_owned()),
        ]
    }
}

fn average_gpa(students: &[Student]) -> String {
    if students.is_empty() {
        return "0.00".to_owned();
    }
    let sum: f64 = students.iter().map(Student::gpa).sum();
    format!("{:.2}", sum / students.len() as f64)
}

/// One tile on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
}

impl StatCard {
    fn new(title: &'static str, value: String) -> Self {
        Self { title, value }
    }
}
