//! HTTP inbound adapter: the `/api/v1` JSON API and the guarded page
//! endpoints.

pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod error;
pub mod pages;
pub mod session;
pub mod session_config;
pub mod state;
pub mod student_payload;
pub mod students;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Path prefix of the JSON API.
pub const API_PREFIX: &str = "/api/v1";

/// Register the JSON API under [`API_PREFIX`].
///
/// # Examples
/// ```
/// use actix_web::App;
/// use student_portal::inbound::http::configure_api;
///
/// let app = App::new().configure(configure_api);
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(API_PREFIX)
            .service(auth::login)
            .service(auth::logout)
            .service(auth::current_session)
            .service(students::list_students)
            .service(students::create_student)
            .service(students::list_student_courses)
            .service(students::get_student)
            .service(students::update_student)
            .service(students::delete_student)
            .service(courses::list_courses)
            .service(courses::get_course)
            .service(dashboard::get_dashboard),
    );
}

/// Register the API, the page routes and the extractor error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(error::json_config())
        .app_data(error::query_config())
        .configure(configure_api)
        .configure(pages::configure);
}
