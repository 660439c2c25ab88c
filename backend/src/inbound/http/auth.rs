//! Login, logout and session handlers.
//!
//! ```text
//! POST /api/v1/login {"email":"admin@example.com","password":"password@123"}
//! POST /api/v1/logout
//! GET  /api/v1/session
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::domain::{AuthError, Error, LoginValidationError, SessionUser};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Login request body for `POST /api/v1/login`.
///
/// Missing fields read as empty strings so they fail the credential shape
/// check rather than the JSON extractor.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    #[schema(example = "admin@example.com")]
    pub email: String,
    #[schema(example = "password@123")]
    pub password: String,
}

/// Map an authenticator failure to the error clients see.
///
/// Unknown users and wrong passwords are indistinguishable to callers.
pub(crate) fn map_auth_error(err: &AuthError) -> Error {
    match err {
        AuthError::InvalidFormat(reason) => {
            let (field, code) = match reason {
                LoginValidationError::InvalidEmail => ("email", "invalid_email"),
                LoginValidationError::PasswordTooShort { .. } => ("password", "password_too_short"),
            };
            Error::invalid_request(err.user_message())
                .with_details(json!({ "field": field, "code": code }))
        }
        AuthError::UserNotFound | AuthError::InvalidCredentials => {
            Error::unauthorized(err.user_message())
        }
    }
}

/// Check credentials and establish a session.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = SessionUser, headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Malformed credentials", body = Error),
        (status = 401, description = "Invalid email or password", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["session"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<SessionUser>> {
    let LoginRequest { email, password } = payload.into_inner();
    let user = match state.login.authorize(&email, &password).await {
        Ok(user) => user,
        Err(err) => {
            warn!(reason = %err, "login rejected");
            return Err(map_auth_error(&err));
        }
    };
    session.persist_user(&user)?;
    info!(user_id = %user.id, "user signed in");
    Ok(web::Json(user))
}

/// End the current session.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses(
        (status = 204, description = "Session cleared")
    ),
    tags = ["session"],
    operation_id = "logout",
    security([])
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear();
    HttpResponse::NoContent().finish()
}

/// Identity held by the current session.
#[utoipa::path(
    get,
    path = "/api/v1/session",
    responses(
        (status = 200, description = "Signed-in user", body = SessionUser),
        (status = 401, description = "Login required", body = Error)
    ),
    tags = ["session"],
    operation_id = "currentSession",
    security(("SessionCookie" = []))
)]
#[get("/session")]
pub async fn current_session(session: SessionContext) -> ApiResult<web::Json<SessionUser>> {
    session.require_user().map(web::Json)
}
