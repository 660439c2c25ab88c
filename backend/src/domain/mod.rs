//! Domain primitives and aggregates.
//!
//! Purpose: define the strongly typed records the HTTP adapters and the
//! record store exchange, plus the pure rules (login checks, page access)
//! that do not depend on a framework.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Student and Course: the records the portal manages.
//! - LoginCredentials and SessionUser: login input and session identity.

pub mod auth;
pub mod course;
pub mod error;
pub mod ports;
pub mod route_guard;
pub mod student;
pub mod trace_id;

pub use self::auth::{
    AuthError, DemoUser, INVALID_FORMAT_MESSAGE, INVALID_LOGIN_MESSAGE, LoginCredentials,
    LoginValidationError, PASSWORD_MIN_LEN, PasswordDigest, PasswordDigestError, SessionUser,
    is_well_formed_email,
};
pub use self::course::{Course, CourseDraft};
pub use self::error::{Error, ErrorCode};
pub use self::route_guard::GuardDecision;
pub use self::student::{
    GPA_MAX, GPA_MIN, NewStudent, Student, StudentId, StudentIdError, StudentPatch,
};
pub use self::trace_id::TraceId;

/// HTTP header carrying the request's trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use student_portal::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("Student not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
