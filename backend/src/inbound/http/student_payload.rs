//! Request body parsing for the student endpoints.
//!
//! Bodies are read as raw JSON objects so that presence, `null` and type
//! problems can each be reported against the field that caused them, in a
//! fixed field order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::domain::{Error, NewStudent, StudentPatch};

use super::validation::{invalid_number_error, missing_field_error};

const REQUIRED_TEXT_FIELDS: [&str; 5] =
    ["name", "email", "registrationNumber", "major", "dateOfBirth"];
const GPA_FIELD: &str = "gpa";
const AVATAR_FIELD: &str = "avatar";
const COURSES_FIELD: &str = "enrolledCourses";

/// Documented shape of a create or update body.
///
/// All fields are required on create except `avatar` and
/// `enrolledCourses`; any subset may be sent on update.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentPayload {
    #[schema(example = "Jane Smith")]
    pub name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "REG-2024-001")]
    pub registration_number: String,
    #[schema(example = "Biology")]
    pub major: String,
    #[schema(example = "2001-02-03")]
    pub date_of_birth: String,
    /// Number or numeric string.
    #[schema(example = 3.4)]
    pub gpa: f64,
    pub avatar: Option<String>,
    pub enrolled_courses: Option<Vec<String>>,
}

fn as_object(body: Value) -> Result<Map<String, Value>, Error> {
    match body {
        Value::Object(map) => Ok(map),
        _ => Err(Error::invalid_request("request body must be a JSON object")),
    }
}

fn type_error(field: &str, expected: &str) -> Error {
    Error::invalid_request(format!("{field} must be {expected}")).with_details(json!({
        "field": field,
        "code": "invalid_type",
    }))
}

fn null_error(field: &str) -> Error {
    Error::invalid_request(format!("{field} must not be null")).with_details(json!({
        "field": field,
        "code": "null_field",
    }))
}

fn string(field: &str, value: &Value) -> Result<String, Error> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| type_error(field, "a string"))
}

fn required_text(field: &str, value: &Value) -> Result<String, Error> {
    let text = string(field, value)?;
    if text.trim().is_empty() {
        return Err(missing_field_error(field));
    }
    Ok(text)
}

fn gpa(value: &Value) -> Result<f64, Error> {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) if raw.trim().is_empty() => return Err(missing_field_error(GPA_FIELD)),
        Value::String(raw) => raw.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|gpa| gpa.is_finite())
        .ok_or_else(|| invalid_number_error(GPA_FIELD))
}

fn avatar(value: &Value) -> Result<Option<String>, Error> {
    match value {
        Value::Null => Ok(None),
        Value::String(url) if url.trim().is_empty() => Ok(None),
        Value::String(url) => Ok(Some(url.clone())),
        _ => Err(type_error(AVATAR_FIELD, "a string")),
    }
}

fn courses(value: &Value) -> Result<Vec<String>, Error> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| type_error(COURSES_FIELD, "a list of course codes"))
            })
            .collect(),
        _ => Err(type_error(COURSES_FIELD, "a list of course codes")),
    }
}

fn present<'a>(map: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    map.get(field).filter(|value| !value.is_null())
}

/// Parse a create body.
///
/// Required fields are checked in the order `name, email,
/// registrationNumber, major, dateOfBirth, gpa`; the first one that is
/// missing, `null` or blank is reported. A `gpa` of `0` is present.
pub fn parse_new_student(body: Value) -> Result<NewStudent, Error> {
    let map = as_object(body)?;
    let mut texts = Vec::with_capacity(REQUIRED_TEXT_FIELDS.len());
    for field in REQUIRED_TEXT_FIELDS {
        let value = present(&map, field).ok_or_else(|| missing_field_error(field))?;
        texts.push(required_text(field, value)?);
    }
    let gpa = gpa(present(&map, GPA_FIELD).ok_or_else(|| missing_field_error(GPA_FIELD))?)?;
    let avatar = map.get(AVATAR_FIELD).map(avatar).transpose()?.flatten();
    let enrolled_courses = map
        .get(COURSES_FIELD)
        .map(courses)
        .transpose()?
        .unwrap_or_default();

    let mut texts = texts.into_iter();
    let mut next = || texts.next().unwrap_or_default();
    Ok(NewStudent {
        name: next(),
        email: next(),
        registration_number: next(),
        major: next(),
        date_of_birth: next(),
        gpa,
        avatar,
        enrolled_courses,
    })
}

/// Parse an update body.
///
/// Absent fields are kept and strings are stored as sent, blank included.
/// `null` clears `avatar` and empties `enrolledCourses`; on any other field
/// it is rejected. `id` is ignored.
pub fn parse_student_patch(body: Value) -> Result<StudentPatch, Error> {
    let map = as_object(body)?;
    let text_field = |field: &str| -> Result<Option<String>, Error> {
        match map.get(field) {
            None => Ok(None),
            Some(Value::Null) => Err(null_error(field)),
            Some(value) => string(field, value).map(Some),
        }
    };
    let gpa = match map.get(GPA_FIELD) {
        None => None,
        Some(Value::Null) => return Err(null_error(GPA_FIELD)),
        Some(Value::String(raw)) if raw.trim().is_empty() => {
            return Err(invalid_number_error(GPA_FIELD));
        }
        Some(value) => Some(gpa(value)?),
    };
    Ok(StudentPatch {
        name: text_field("name")?,
        email: text_field("email")?,
        registration_number: text_field("registrationNumber")?,
        major: text_field("major")?,
        date_of_birth: text_field("dateOfBirth")?,
        gpa,
        avatar: map.get(AVATAR_FIELD).map(avatar).transpose()?,
        enrolled_courses: map.get(COURSES_FIELD).map(courses).transpose()?,
    })
}
