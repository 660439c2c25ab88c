//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;

use crate::domain::SessionUser;
use crate::domain::ports::{DemoUserDirectory, FixtureCourseCatalogue};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::InMemoryStudentRepository;

/// Session middleware with a fresh key and the `Secure` flag off so plain
/// HTTP test requests keep the cookie.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// The `session` cookie set by `response`.
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .expect("session cookie set")
}

/// Identity of the first demo account.
pub fn admin_user() -> SessionUser {
    SessionUser {
        id: "1".into(),
        name: "Admin User".into(),
        email: "admin@example.com".into(),
        image: None,
    }
}

/// State backed by an empty in-memory store and the fixture ports.
pub fn fixture_state() -> HttpState {
    HttpState::new(
        Arc::new(InMemoryStudentRepository::default()),
        Arc::new(FixtureCourseCatalogue::default()),
        Arc::new(DemoUserDirectory::default()),
    )
}
