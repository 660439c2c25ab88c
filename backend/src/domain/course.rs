//! Read-only course reference data.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Catalogue course.
///
/// ## Invariants
/// - `id` and `code` hold the same value; both are exposed because clients
///   address courses by id and students reference them by code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[schema(example = "CS101")]
    id: String,
    #[schema(example = "Introduction to Computer Science")]
    title: String,
    #[schema(example = "CS101")]
    code: String,
    #[schema(example = "Dr. Alan Turing")]
    instructor: String,
    description: String,
    #[schema(example = 3)]
    credits: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    schedule: Option<String>,
    #[serde(default)]
    enrolled_students: Vec<String>,
}

/// Field values for building a [`Course`]; `code` doubles as the id.
#[derive(Debug, Clone)]
pub struct CourseDraft<'a> {
    pub code: &'a str,
    pub title: &'a str,
    pub instructor: &'a str,
    pub description: &'a str,
    pub credits: u32,
    pub schedule: Option<&'a str>,
    pub enrolled_students: &'a [&'a str],
}

impl Course {
    pub fn new(draft: CourseDraft<'_>) -> Self {
        Self {
            id: draft.code.to_owned(),
            title: draft.title.to_owned(),
            code: draft.code.to_owned(),
            instructor: draft.instructor.to_owned(),
            description: draft.description.to_owned(),
            credits: draft.credits,
            schedule: draft.schedule.map(str::to_owned),
            enrolled_students: draft
                .enrolled_students
                .iter()
                .map(|id| (*id).to_owned())
                .collect(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }

    pub fn schedule(&self) -> Option<&str> {
        self.schedule.as_deref()
    }

    /// Ids of students the catalogue lists as enrolled.
    pub fn enrolled_students(&self) -> &[String] {
        &self.enrolled_students
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_mirrors_code() {
        let course = Course::new(CourseDraft {
            code: "PHY110",
            title: "Mechanics",
            instructor: "Dr. Emmy Noether",
            description: "Motion and forces.",
            credits: 4,
            schedule: None,
            enrolled_students: &["7"],
        });
        assert_eq!(course.id(), course.code());
        let value = serde_json::to_value(&course).expect("serialise");
        assert_eq!(value["enrolledStudents"][0], "7");
        assert!(value.get("schedule").is_none());
    }
}
