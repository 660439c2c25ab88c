//! Student records.
//!
//! A [`Student`] is created from a [`NewStudent`] once the store assigns it a
//! [`StudentId`], and changed afterwards only through [`StudentPatch`], which
//! overwrites the fields it carries and leaves the rest alone.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lowest GPA the record forms accept.
pub const GPA_MIN: f64 = 0.0;
/// Highest GPA the record forms accept.
pub const GPA_MAX: f64 = 4.0;
/// Length of identifiers produced by [`StudentId::generate`].
pub const GENERATED_ID_LEN: usize = 7;

const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Validation errors for student identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StudentIdError {
    /// Identifier was empty or only whitespace.
    #[error("student id must not be empty")]
    Empty,
}

/// Opaque student identifier.
///
/// Generated identifiers are short random base-36 strings. Nothing checks
/// them against existing ids; with 36^7 possibilities a collision among a
/// few thousand records is negligible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StudentId(String);

impl StudentId {
    /// Validate an identifier taken from a request path or a stored record.
    pub fn new(id: impl Into<String>) -> Result<Self, StudentIdError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(StudentIdError::Empty);
        }
        Ok(Self(id))
    }

    /// Generate a fresh random identifier.
    ///
    /// # Examples
    /// ```
    /// use student_portal::domain::StudentId;
    ///
    /// let id = StudentId::generate();
    /// assert_eq!(id.as_ref().len(), 7);
    /// ```
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let id = (0..GENERATED_ID_LEN)
            .map(|_| char::from(ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())]))
            .collect();
        Self(id)
    }
}

impl AsRef<str> for StudentId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<StudentId> for String {
    fn from(value: StudentId) -> Self {
        value.0
    }
}

impl TryFrom<String> for StudentId {
    type Error = StudentIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Field values for a student that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub registration_number: String,
    pub major: String,
    pub date_of_birth: String,
    pub gpa: f64,
    pub avatar: Option<String>,
    pub enrolled_courses: Vec<String>,
}

/// Partial update applied by [`Student::apply`].
///
/// `None` keeps the stored value. `avatar: Some(None)` clears the avatar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub registration_number: Option<String>,
    pub major: Option<String>,
    pub date_of_birth: Option<String>,
    pub gpa: Option<f64>,
    pub avatar: Option<Option<String>>,
    pub enrolled_courses: Option<Vec<String>>,
}

impl StudentPatch {
    /// Whether applying the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Stored student record.
///
/// ## Invariants
/// - `id` is assigned by the store and never changes.
/// - Nothing else is enforced here: the store trusts its callers, and GPA
///   range checks belong to the forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[schema(value_type = String, example = "k3v9x0a")]
    id: StudentId,
    #[schema(example = "Jane Smith")]
    name: String,
    #[schema(example = "jane.smith@example.com")]
    email: String,
    #[schema(example = "REG-2024-001")]
    registration_number: String,
    #[schema(example = "Computer Science")]
    major: String,
    #[schema(example = "2002-04-17")]
    date_of_birth: String,
    #[schema(example = 3.6)]
    gpa: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
    #[serde(default)]
    enrolled_courses: Vec<String>,
}

impl Student {
    /// Attach an identifier to new field values.
    pub fn from_new(id: StudentId, new: NewStudent) -> Self {
        let NewStudent {
            name,
            email,
            registration_number,
            major,
            date_of_birth,
            gpa,
            avatar,
            enrolled_courses,
        } = new;
        Self {
            id,
            name,
            email,
            registration_number,
            major,
            date_of_birth,
            gpa,
            avatar,
            enrolled_courses,
        }
    }

    pub fn id(&self) -> &StudentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn registration_number(&self) -> &str {
        &self.registration_number
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn date_of_birth(&self) -> &str {
        &self.date_of_birth
    }

    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    /// Course codes in enrolment order.
    pub fn enrolled_courses(&self) -> &[String] {
        &self.enrolled_courses
    }

    /// Overwrite every field the patch carries.
    ///
    /// # Examples
    /// ```
    /// use student_portal::domain::{NewStudent, Student, StudentId, StudentPatch};
    ///
    /// let mut student = Student::from_new(
    ///     StudentId::new("s1").expect("id"),
    ///     NewStudent {
    ///         name: "Jane Smith".into(),
    ///         email: "jane@example.com".into(),
    ///         registration_number: "REG-1".into(),
    ///         major: "Biology".into(),
    ///         date_of_birth: "2001-02-03".into(),
    ///         gpa: 3.1,
    ///         avatar: None,
    ///         enrolled_courses: Vec::new(),
    ///     },
    /// );
    /// student.apply(StudentPatch { major: Some("Physics".into()), ..StudentPatch::default() });
    /// assert_eq!(student.major(), "Physics");
    /// assert_eq!(student.name(), "Jane Smith");
    /// ```
    pub fn apply(&mut self, patch: StudentPatch) {
        let StudentPatch {
            name,
            email,
            registration_number,
            major,
            date_of_birth,
            gpa,
            avatar,
            enrolled_courses,
        } = patch;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(registration_number) = registration_number {
            self.registration_number = registration_number;
        }
        if let Some(major) = major {
            self.major = major;
        }
        if let Some(date_of_birth) = date_of_birth {
            self.date_of_birth = date_of_birth;
        }
        if let Some(gpa) = gpa {
            self.gpa = gpa;
        }
        if let Some(avatar) = avatar {
            self.avatar = avatar;
        }
        if let Some(enrolled_courses) = enrolled_courses {
            self.enrolled_courses = enrolled_courses;
        }
    }

    /// Case-insensitive substring match over name, email, registration
    /// number and major. `needle` must already be lowercase.
    pub fn matches_search(&self, needle: &str) -> bool {
        [
            &self.name,
            &self.email,
            &self.registration_number,
            &self.major,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::collections::HashSet;

    #[fixture]
    fn jane() -> Student {
        Student::from_new(
            StudentId::new("jane01").expect("id"),
            NewStudent {
                name: "Jane Smith".into(),
                email: "jane.smith@example.com".into(),
                registration_number: "REG-2024-001".into(),
                major: "Computer Science".into(),
                date_of_birth: "2002-04-17".into(),
                gpa: 3.6,
                avatar: Some("https://example.com/jane.png".into()),
                enrolled_courses: vec!["CS101".into()],
            },
        )
    }

    #[rstest]
    fn generated_ids_are_short_base36() {
        let id = StudentId::generate();
        assert_eq!(id.as_ref().len(), GENERATED_ID_LEN);
        assert!(
            id.as_ref()
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        );
    }

    #[rstest]
    fn generated_ids_do_not_repeat_across_many_draws() {
        let ids: HashSet<_> = (0..2_000).map(|_| StudentId::generate()).collect();
        assert_eq!(ids.len(), 2_000);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_ids_are_rejected(#[case] raw: &str) {
        assert_eq!(StudentId::new(raw), Err(StudentIdError::Empty));
    }

    #[rstest]
    #[case("smith")]
    #[case("SMITH")]
    #[case("reg-2024")]
    #[case("computer")]
    #[case("@example.COM")]
    fn search_matches_any_indexed_field(jane: Student, #[case] query: &str) {
        assert!(jane.matches_search(&query.to_lowercase()));
    }

    #[rstest]
    fn search_ignores_unindexed_fields(jane: Student) {
        assert!(!jane.matches_search("2002-04-17"));
        assert!(!jane.matches_search("cs101"));
    }

    #[rstest]
    fn patch_overwrites_only_given_fields(mut jane: Student) {
        jane.apply(StudentPatch {
            gpa: Some(3.9),
            enrolled_courses: Some(vec!["CS201".into(), "MATH101".into()]),
            ..StudentPatch::default()
        });
        assert_eq!(jane.gpa(), 3.9);
        assert_eq!(jane.enrolled_courses(), ["CS201", "MATH101"]);
        assert_eq!(jane.name(), "Jane Smith");
        assert_eq!(jane.avatar(), Some("https://example.com/jane.png"));
    }

    #[rstest]
    fn patch_can_clear_avatar(mut jane: Student) {
        jane.apply(StudentPatch {
            avatar: Some(None),
            ..StudentPatch::default()
        });
        assert!(jane.avatar().is_none());
    }

    #[rstest]
    fn serialises_camel_case_and_omits_missing_avatar(mut jane: Student) {
        jane.apply(StudentPatch {
            avatar: Some(None),
            ..StudentPatch::default()
        });
        let value = serde_json::to_value(&jane).expect("serialise");
        assert_eq!(value["registrationNumber"], "REG-2024-001");
        assert_eq!(value["dateOfBirth"], "2002-04-17");
        assert_eq!(value["enrolledCourses"][0], "CS101");
        assert!(value.get("avatar").is_none());
    }

    #[rstest]
    fn stored_records_without_courses_default_to_empty() {
        let student: Student = serde_json::from_value(serde_json::json!({
            "id": "abc1234",
            "name": "Sam",
            "email": "sam@example.com",
            "registrationNumber": "R-9",
            "major": "History",
            "dateOfBirth": "2000-01-01",
            "gpa": 2.5
        }))
        .expect("deserialise");
        assert!(student.enrolled_courses().is_empty());
    }
}
