//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every `/api/v1` handler and the schemas they return.
//! Swagger UI serves it at `/docs` in debug builds, and the
//! `openapi-dump` binary prints it for external tooling.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Course, Error, ErrorCode, SessionUser, Student};
use crate::inbound::http::auth::LoginRequest;
use crate::inbound::http::student_payload::StudentPayload;
use crate::inbound::http::students::{DeleteStudentResponse, StudentPageResponse};
use crate::presentation::DashboardSummary;

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the JSON API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Student portal API",
        description = "Student records, the course catalogue and session login.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::logout,
        crate::inbound::http::auth::current_session,
        crate::inbound::http::students::list_students,
        crate::inbound::http::students::create_student,
        crate::inbound::http::students::get_student,
        crate::inbound::http::students::update_student,
        crate::inbound::http::students::delete_student,
        crate::inbound::http::students::list_student_courses,
        crate::inbound::http::courses::list_courses,
        crate::inbound::http::courses::get_course,
        crate::inbound::http::dashboard::get_dashboard,
    ),
    components(schemas(
        Student,
        StudentPayload,
        StudentPageResponse,
        DeleteStudentResponse,
        Course,
        DashboardSummary,
        SessionUser,
        LoginRequest,
        Error,
        ErrorCode,
    )),
    tags(
        (name = "students", description = "Student record management"),
        (name = "courses", description = "Read-only course catalogue"),
        (name = "dashboard", description = "Headline figures"),
        (name = "session", description = "Login and session state")
    )
)]
pub struct ApiDoc;
