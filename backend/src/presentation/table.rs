//! Student table layout.
//!
//! Each [`StudentColumn`] knows its header, alignment and how to turn a
//! [`Student`] into a typed [`Cell`]; there is no lookup by field name.

use serde::Serialize;

use crate::domain::Student;

/// Message shown in place of rows when nothing matches.
pub const EMPTY_TABLE_MESSAGE: &str =
    "No students found. Try adjusting your filters or add a new student.";

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Align {
    Left,
    Right,
}

/// Colour band for a GPA badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GpaBand {
    /// 3.5 and above.
    Excellent,
    /// 3.0 up to 3.5.
    Good,
    /// Below 3.0.
    Fair,
}

impl GpaBand {
    /// Band for `gpa`.
    ///
    /// # Examples
    /// ```
    /// use student_portal::presentation::GpaBand;
    ///
    /// assert_eq!(GpaBand::from_gpa(3.5), GpaBand::Excellent);
    /// assert_eq!(GpaBand::from_gpa(3.49), GpaBand::Good);
    /// assert_eq!(GpaBand::from_gpa(2.99), GpaBand::Fair);
    /// ```
    pub fn from_gpa(gpa: f64) -> Self {
        if gpa >= 3.5 {
            Self::Excellent
        } else if gpa >= 3.0 {
            Self::Good
        } else {
            Self::Fair
        }
    }
}

/// Rendered content of one table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Cell {
    /// Avatar (or initial), name and email.
    Identity {
        name: String,
        email: String,
        avatar: Option<String>,
        initial: String,
    },
    Text { text: String },
    /// GPA to one decimal place with its band.
    Gpa { value: String, band: GpaBand },
    CourseCount { count: usize, text: String },
    /// Links to the detail and edit pages.
    Actions {
        view: String,
        edit: String,
        delete: String,
    },
}

/// Columns of the student table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StudentColumn {
    Name,
    RegistrationNumber,
    Major,
    Gpa,
    EnrolledCourses,
    Actions,
}

impl StudentColumn {
    /// Columns of the full student list, left to right.
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::RegistrationNumber,
        Self::Major,
        Self::Gpa,
        Self::EnrolledCourses,
        Self::Actions,
    ];

    /// Columns of the dashboard's recent-students table.
    pub const SUMMARY: [Self; 5] = [
        Self::Name,
        Self::RegistrationNumber,
        Self::Major,
        Self::Gpa,
        Self::EnrolledCourses,
    ];

    /// Header text.
    pub fn header(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::RegistrationNumber => "Reg No",
            Self::Major => "Major",
            Self::Gpa => "GPA",
            Self::EnrolledCourses => "Courses",
            Self::Actions => "Actions",
        }
    }

    pub fn align(self) -> Align {
        match self {
            Self::Actions => Align::Right,
            _ => Align::Left,
        }
    }

    /// Render this column for `student`.
    pub fn render(self, student: &Student) -> Cell {
        match self {
            Self::Name => Cell::Identity {
                name: student.name().to_owned(),
                email: student.email().to_owned(),
                avatar: student.avatar().map(str::to_owned),
                initial: student
                    .name()
                    .chars()
                    .next()
                    .map(|first| first.to_uppercase().collect())
                    .unwrap_or_default(),
            },
            Self::RegistrationNumber => Cell::Text {
                text: student.registration_number().to_owned(),
            },
            Self::Major => Cell::Text {
                text: student.major().to_owned(),
            },
            Self::Gpa => Cell::Gpa {
                value: format!("{:.1}", student.gpa()),
                band: GpaBand::from_gpa(student.gpa()),
            },
            Self::EnrolledCourses => {
                let count = student.enrolled_courses().len();
                Cell::CourseCount {
                    count,
                    text: format!("{count} courses"),
                }
            }
            Self::Actions => Cell::Actions {
                view: format!("/students/{}", student.id()),
                edit: format!("/students/{}/edit", student.id()),
                delete: format!("/students/{}/delete", student.id()),
            },
        }
    }
}

/// Header entry of a rendered table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnHeader {
    pub column: StudentColumn,
    pub text: &'static str,
    pub align: Align,
}

/// One student's cells, in column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRow {
    pub id: String,
    pub cells: Vec<Cell>,
}

/// Rendered student table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentTable {
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<StudentRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

impl StudentTable {
    /// Render `students` under `columns`.
    pub fn new(columns: &[StudentColumn], students: &[Student]) -> Self {
        let rows = students
            .iter()
            .map(|student| StudentRow {
                id: student.id().to_string(),
                cells: columns.iter().map(|column| column.render(student)).collect(),
            })
            .collect::<Vec<_>>();
        Self {
            columns: columns
                .iter()
                .map(|&column| ColumnHeader {
                    column,
                    text: column.header(),
                    align: column.align(),
                })
                .collect(),
            empty_message: rows.is_empty().then_some(EMPTY_TABLE_MESSAGE),
            rows,
        }
    }
}
