//! Create and edit form for students.
//!
//! The form enforces what the record store does not: every text field is
//! filled in, the email looks like an address and the GPA lies within
//! `0.0..=4.0`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{GPA_MAX, GPA_MIN, NewStudent, Student, StudentPatch, is_well_formed_email};

/// Messages keyed by the camelCase field name they belong to.
pub type FormErrors = BTreeMap<&'static str, &'static str>;

/// Values entered on the student form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentForm {
    pub name: String,
    pub email: String,
    pub registration_number: String,
    pub major: String,
    pub date_of_birth: String,
    pub gpa: f64,
}

impl StudentForm {
    /// Prefill the edit form from a stored record.
    pub fn from_student(student: &Student) -> Self {
        Self {
            name: student.name().to_owned(),
            email: student.email().to_owned(),
            registration_number: student.registration_number().to_owned(),
            major: student.major().to_owned(),
            date_of_birth: student.date_of_birth().to_owned(),
            gpa: student.gpa(),
        }
    }

    /// Check every field, collecting one message per invalid field.
    ///
    /// # Examples
    /// ```
    /// use student_portal::presentation::StudentForm;
    ///
    /// let errors = StudentForm { gpa: 4.5, ..StudentForm::default() }
    ///     .validate()
    ///     .expect_err("blank form");
    /// assert_eq!(errors.get("gpa"), Some(&"GPA must be between 0 and 4.0"));
    /// assert_eq!(errors.get("name"), Some(&"Name is required"));
    /// ```
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        let required = [
            ("name", &self.name, "Name is required"),
            ("email", &self.email, "Email is required"),
            (
                "registrationNumber",
                &self.registration_number,
                "Registration number is required",
            ),
            ("major", &self.major, "Major is required"),
            ("dateOfBirth", &self.date_of_birth, "Date of birth is required"),
        ];
        for (field, value, message) in required {
            if value.trim().is_empty() {
                errors.insert(field, message);
            }
        }
        if !errors.contains_key("email") && !is_well_formed_email(&self.email) {
            errors.insert("email", "Please enter a valid email address");
        }
        if !(GPA_MIN..=GPA_MAX).contains(&self.gpa) {
            errors.insert("gpa", "GPA must be between 0 and 4.0");
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Record to create; new students start with no enrolments.
    pub fn into_new_student(self) -> NewStudent {
        NewStudent {
            name: self.name,
            email: self.email,
            registration_number: self.registration_number,
            major: self.major,
            date_of_birth: self.date_of_birth,
            gpa: self.gpa,
            avatar: None,
            enrolled_courses: Vec::new(),
        }
    }

    /// Patch overwriting the fields the form edits; avatar and enrolments
    /// are left alone.
    pub fn into_patch(self) -> StudentPatch {
        StudentPatch {
            name: Some(self.name),
            email: Some(self.email),
            registration_number: Some(self.registration_number),
            major: Some(self.major),
            date_of_birth: Some(self.date_of_birth),
            gpa: Some(self.gpa),
            ..StudentPatch::default()
        }
    }
}
