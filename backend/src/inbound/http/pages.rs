//! Page endpoints serving view models.
//!
//! Everything here sits behind [`crate::middleware::RouteGuard`], so
//! handlers can assume a session except on `/login`.
//!
//! ```text
//! GET  /dashboard
//! GET  /students?page=2&limit=25&search=smith
//! GET  /students/new        POST /students/new
//! GET  /students/{id}      POST /students/{id}/delete
//! GET  /students/{id}/edit  POST /students/{id}/edit
//! GET  /courses
//! GET  /login?callbackUrl=/students
//! ```

use actix_web::http::header::LOCATION;
use actix_web::{HttpResponse, get, post, web};
use pagination::PageRequest;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::ports::StudentQuery;
use crate::domain::route_guard::LANDING_PATH;
use crate::domain::{Error, SessionUser, Student};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dashboard::summarise;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::students::{
    ListStudentsQuery, STUDENT_NOT_FOUND, load_student, student_id, student_query,
};
use crate::presentation::{
    CourseCard, DashboardSummary, FormErrors, Pager, StatCard, StudentColumn, StudentDetail,
    StudentForm, StudentTable,
};

/// Rows in the dashboard's recent-students table.
pub const RECENT_STUDENT_LIMIT: usize = 5;
/// Cards in the dashboard's recent-courses strip.
pub const RECENT_COURSE_COUNT: usize = 3;

/// Dashboard page model.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPage {
    pub user: SessionUser,
    pub summary: DashboardSummary,
    pub stat_cards: Vec<StatCard>,
    pub recent_students: StudentTable,
    pub recent_students_pager: Pager,
    pub recent_courses: Vec<CourseCard>,
}

/// Student list page model.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentListPage {
    pub table: StudentTable,
    pub pager: Pager,
    pub search: String,
}

/// Create or edit form page model.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentFormPage {
    /// Where the form posts to.
    pub action: String,
    pub form: StudentForm,
    pub errors: FormErrors,
}

impl StudentFormPage {
    fn new(action: String, form: StudentForm) -> Self {
        Self {
            action,
            form,
            errors: FormErrors::new(),
        }
    }
}

/// Login page query string.
#[derive(Debug, Default, Deserialize)]
pub struct LoginPageQuery {
    #[serde(rename = "callbackUrl")]
    pub callback_url: Option<String>,
}

/// Login page model.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPage {
    pub callback_url: String,
}

fn see_other(location: String) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}

fn rejected_form(action: String, form: StudentForm, errors: FormErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(StudentFormPage {
        action,
        form,
        errors,
    })
}

#[get("/dashboard")]
pub async fn dashboard_page(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<DashboardPage>> {
    let user = session.require_user()?;
    let summary = summarise(&state).await?;
    let recent = StudentQuery {
        page: PageRequest::new(1, RECENT_STUDENT_LIMIT)
            .map_err(|err| Error::internal(err.to_string()))?,
        search: String::new(),
    };
    let page = state.students.paginate(&recent).await?;
    let courses = state.courses.list().await?;
    Ok(web::Json(DashboardPage {
        user,
        stat_cards: summary.stat_cards(),
        summary,
        recent_students: StudentTable::new(&StudentColumn::SUMMARY, page.items()),
        recent_students_pager: Pager::for_page(&page, RECENT_STUDENT_LIMIT),
        recent_courses: courses
            .iter()
            .take(RECENT_COURSE_COUNT)
            .map(CourseCard::from)
            .collect(),
    }))
}

#[get("/students")]
pub async fn student_list_page(
    state: web::Data<HttpState>,
    query: web::Query<ListStudentsQuery>,
) -> ApiResult<web::Json<StudentListPage>> {
    let student_query = student_query(&query)?;
    let page = state.students.paginate(&student_query).await?;
    Ok(web::Json(StudentListPage {
        table: StudentTable::new(&StudentColumn::ALL, page.items()),
        pager: Pager::for_page(&page, student_query.page.limit()),
        search: student_query.search,
    }))
}

#[get("/students/new")]
pub async fn new_student_page() -> web::Json<StudentFormPage> {
    web::Json(StudentFormPage::new(
        "/students/new".to_owned(),
        StudentForm::default(),
    ))
}

#[post("/students/new")]
pub async fn submit_new_student(
    state: web::Data<HttpState>,
    form: web::Json<StudentForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    if let Err(errors) = form.validate() {
        return Ok(rejected_form("/students/new".to_owned(), form, errors));
    }
    let student = state.students.create(form.into_new_student()).await?;
    info!(student_id = %student.id(), "student created from form");
    Ok(see_other("/students".to_owned()))
}

#[get("/students/{id}")]
pub async fn student_detail_page(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<StudentDetail>> {
    let id = student_id(path.into_inner())?;
    let student = load_student(&state, &id).await?;
    let courses = state.courses.resolve(student.enrolled_courses()).await?;
    Ok(web::Json(StudentDetail::new(student, courses)))
}

fn edit_action(student: &Student) -> String {
    format!("/students/{}/edit", student.id())
}

#[get("/students/{id}/edit")]
pub async fn edit_student_page(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<StudentFormPage>> {
    let id = student_id(path.into_inner())?;
    let student = load_student(&state, &id).await?;
    Ok(web::Json(StudentFormPage::new(
        edit_action(&student),
        StudentForm::from_student(&student),
    )))
}

#[post("/students/{id}/edit")]
pub async fn submit_student_edit(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    form: web::Json<StudentForm>,
) -> ApiResult<HttpResponse> {
    let id = student_id(path.into_inner())?;
    let student = load_student(&state, &id).await?;
    let form = form.into_inner();
    if let Err(errors) = form.validate() {
        return Ok(rejected_form(edit_action(&student), form, errors));
    }
    state
        .students
        .update(&id, form.into_patch())
        .await?
        .ok_or_else(|| Error::not_found(STUDENT_NOT_FOUND))?;
    info!(student_id = %id, "student updated from form");
    Ok(see_other(format!("/students/{id}")))
}

#[post("/students/{id}/delete")]
pub async fn submit_student_delete(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = student_id(path.into_inner())?;
    if !state.students.delete(&id).await? {
        return Err(Error::not_found(STUDENT_NOT_FOUND));
    }
    info!(student_id = %id, "student deleted from page");
    Ok(see_other("/students".to_owned()))
}

#[get("/courses")]
pub async fn courses_page(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<CourseCard>>> {
    let courses = state.courses.list().await?;
    Ok(web::Json(courses.iter().map(CourseCard::from).collect()))
}

#[get("/login")]
pub async fn login_page(query: web::Query<LoginPageQuery>) -> web::Json<LoginPage> {
    let callback_url = query
        .into_inner()
        .callback_url
        .filter(|url| url.starts_with('/') && !url.starts_with("//"))
        .unwrap_or_else(|| LANDING_PATH.to_owned());
    web::Json(LoginPage { callback_url })
}

/// Register the page routes on `cfg`.
///
/// `/students/new` is registered ahead of `/students/{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(dashboard_page)
        .service(student_list_page)
        .service(new_student_page)
        .service(submit_new_student)
        .service(edit_student_page)
        .service(submit_student_edit)
        .service(submit_student_delete)
        .service(student_detail_page)
        .service(courses_page)
        .service(login_page);
}

#[cfg(test)]
mod tests;
