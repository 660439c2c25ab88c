//! Student record API handlers.
//!
//! ```text
//! GET    /api/v1/students?page=1&limit=10&search=smith
//! POST   /api/v1/students
//! GET    /api/v1/students/{id}
//! PUT    /api/v1/students/{id}
//! DELETE /api/v1/students/{id}
//! GET    /api/v1/students/{id}/courses
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, Page, PageRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::StudentQuery;
use crate::domain::{Course, Error, Student, StudentId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::student_payload::{StudentPayload, parse_new_student, parse_student_patch};
use crate::inbound::http::validation::{invalid_number_error, out_of_range_error};

pub(crate) const STUDENT_NOT_FOUND: &str = "Student not found";

/// Query string for `GET /api/v1/students`.
///
/// Values are kept as text so malformed numbers are reported against the
/// parameter that carried them.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListStudentsQuery {
    /// 1-based page number.
    #[param(value_type = Option<u32>, example = 1)]
    pub page: Option<String>,
    /// Page size.
    #[param(value_type = Option<u32>, example = 10)]
    pub limit: Option<String>,
    /// Case-insensitive match on name, email, registration number or major.
    pub search: Option<String>,
}

impl ListStudentsQuery {
    fn is_empty(&self) -> bool {
        self.page.is_none() && self.limit.is_none() && self.search.is_none()
    }
}

/// Paged listing returned when any list parameter is present.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentPageResponse {
    pub students: Vec<Student>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
}

impl From<Page<Student>> for StudentPageResponse {
    fn from(page: Page<Student>) -> Self {
        let (total, number, total_pages) = (page.total(), page.page(), page.total_pages());
        Self {
            students: page.into_items(),
            total,
            page: number,
            total_pages,
        }
    }
}

/// Body of a successful delete.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteStudentResponse {
    pub success: bool,
}

fn positive(field: &str, raw: Option<&str>, default: usize) -> Result<usize, Error> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let value: usize = raw
        .trim()
        .parse()
        .map_err(|_| invalid_number_error(field))?;
    if value == 0 {
        return Err(out_of_range_error(field, 1));
    }
    Ok(value)
}

/// Build a repository query from list parameters, applying the defaults.
pub(crate) fn student_query(query: &ListStudentsQuery) -> Result<StudentQuery, Error> {
    let page = positive("page", query.page.as_deref(), DEFAULT_PAGE)?;
    let limit = positive("limit", query.limit.as_deref(), DEFAULT_LIMIT)?;
    let page = PageRequest::new(page, limit).map_err(|err| Error::invalid_request(err.to_string()))?;
    Ok(StudentQuery {
        page,
        search: query.search.clone().unwrap_or_default(),
    })
}

/// Path ids are never blank, but an unusable id is still just an unknown one.
pub(crate) fn student_id(raw: String) -> Result<StudentId, Error> {
    StudentId::new(raw).map_err(|_| Error::not_found(STUDENT_NOT_FOUND))
}

pub(crate) async fn load_student(state: &HttpState, id: &StudentId) -> ApiResult<Student> {
    state
        .students
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found(STUDENT_NOT_FOUND))
}

/// List students, optionally searched and paged.
#[utoipa::path(
    get,
    path = "/api/v1/students",
    params(ListStudentsQuery),
    responses(
        (status = 200, description = "Every student when no parameter is given, otherwise one page", body = StudentPageResponse),
        (status = 400, description = "Invalid page or limit", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["students"],
    operation_id = "listStudents",
    security([])
)]
#[get("/students")]
pub async fn list_students(
    state: web::Data<HttpState>,
    query: web::Query<ListStudentsQuery>,
) -> ApiResult<HttpResponse> {
    if query.is_empty() {
        let students = state.students.list().await?;
        return Ok(HttpResponse::Ok().json(students));
    }
    let student_query = student_query(&query)?;
    let page = state.students.paginate(&student_query).await?;
    Ok(HttpResponse::Ok().json(StudentPageResponse::from(page)))
}

/// Create a student record.
#[utoipa::path(
    post,
    path = "/api/v1/students",
    request_body = StudentPayload,
    responses(
        (status = 201, description = "Stored student", body = Student),
        (status = 400, description = "Missing or malformed field", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["students"],
    operation_id = "createStudent",
    security([])
)]
#[post("/students")]
pub async fn create_student(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let new_student = parse_new_student(payload.into_inner())?;
    let student = state.students.create(new_student).await?;
    info!(student_id = %student.id(), "student created");
    Ok(HttpResponse::Created().json(student))
}

/// Fetch one student.
#[utoipa::path(
    get,
    path = "/api/v1/students/{id}",
    params(("id" = String, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student", body = Student),
        (status = 404, description = "Student not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["students"],
    operation_id = "getStudent",
    security([])
)]
#[get("/students/{id}")]
pub async fn get_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Student>> {
    let id = student_id(path.into_inner())?;
    load_student(&state, &id).await.map(web::Json)
}

/// Merge the provided fields over a stored student.
#[utoipa::path(
    put,
    path = "/api/v1/students/{id}",
    params(("id" = String, Path, description = "Student id")),
    request_body = StudentPayload,
    responses(
        (status = 200, description = "Updated student", body = Student),
        (status = 400, description = "Malformed field", body = Error),
        (status = 404, description = "Student not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["students"],
    operation_id = "updateStudent",
    security([])
)]
#[put("/students/{id}")]
pub async fn update_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<Student>> {
    let id = student_id(path.into_inner())?;
    let patch = parse_student_patch(payload.into_inner())?;
    let student = state
        .students
        .update(&id, patch)
        .await?
        .ok_or_else(|| Error::not_found(STUDENT_NOT_FOUND))?;
    info!(student_id = %id, "student updated");
    Ok(web::Json(student))
}

/// Remove a student.
#[utoipa::path(
    delete,
    path = "/api/v1/students/{id}",
    params(("id" = String, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student removed", body = DeleteStudentResponse),
        (status = 404, description = "Student not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["students"],
    operation_id = "deleteStudent",
    security([])
)]
#[delete("/students/{id}")]
pub async fn delete_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = student_id(path.into_inner())?;
    if !state.students.delete(&id).await? {
        return Err(Error::not_found(STUDENT_NOT_FOUND));
    }
    info!(student_id = %id, "student deleted");
    Ok(HttpResponse::Ok().json(DeleteStudentResponse { success: true }))
}

/// Catalogue entries for the courses a student is enrolled on.
#[utoipa::path(
    get,
    path = "/api/v1/students/{id}/courses",
    params(("id" = String, Path, description = "Student id")),
    responses(
        (status = 200, description = "Enrolled courses in enrolment order", body = [Course]),
        (status = 404, description = "Student not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["students"],
    operation_id = "listStudentCourses",
    security([])
)]
#[get("/students/{id}/courses")]
pub async fn list_student_courses(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Course>>> {
    let id = student_id(path.into_inner())?;
    let student = load_student(&state, &id).await?;
    let courses = state.courses.resolve(student.enrolled_courses()).await?;
    Ok(web::Json(courses))
}
