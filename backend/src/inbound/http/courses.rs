//! Course catalogue API handlers.
//!
//! ```text
//! GET /api/v1/courses
//! GET /api/v1/courses/{id}
//! ```

use actix_web::{get, web};

use crate::domain::{Course, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

pub(crate) const COURSE_NOT_FOUND: &str = "Course not found";

/// List the catalogue.
#[utoipa::path(
    get,
    path = "/api/v1/courses",
    responses(
        (status = 200, description = "Every course in catalogue order", body = [Course]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["courses"],
    operation_id = "listCourses",
    security([])
)]
#[get("/courses")]
pub async fn list_courses(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Course>>> {
    Ok(web::Json(state.courses.list().await?))
}

/// Fetch one course by its code.
#[utoipa::path(
    get,
    path = "/api/v1/courses/{id}",
    params(("id" = String, Path, description = "Course code", example = "CS101")),
    responses(
        (status = 200, description = "Course", body = Course),
        (status = 404, description = "Course not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["courses"],
    operation_id = "getCourse",
    security([])
)]
#[get("/courses/{id}")]
pub async fn get_course(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Course>> {
    state
        .courses
        .find(&path)
        .await?
        .map(web::Json)
        .ok_or_else(|| Error::not_found(COURSE_NOT_FOUND))
}
