//! Shared harness for end-to-end HTTP tests.
//!
//! Builds the application with the same middleware order as the server:
//! route guard inside the session layer, trace identifiers outermost.

use std::sync::Arc;

use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use actix_web::http::header::LOCATION;
use camino::{Utf8Path, Utf8PathBuf};
use student_portal::domain::ports::{DemoUserDirectory, FixtureCourseCatalogue, StudentRepository};
use student_portal::domain::TRACE_ID_HEADER;
use student_portal::inbound::http::session_config::SessionSettings;
use student_portal::inbound::http::state::HttpState;
use student_portal::outbound::persistence::{InMemoryStudentRepository, MirroredStudentRepository};
use tempfile::TempDir;

/// Initialise the full application around `$state`.
///
/// Pass `$settings` to share one session key between app instances.
macro_rules! init_portal {
    ($state:expr) => {
        $crate::portal_app::init_portal!($state, $crate::portal_app::session_settings())
    };
    ($state:expr, $settings:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state))
                .wrap(student_portal::RouteGuard)
                .wrap($settings.middleware())
                .wrap(student_portal::Trace)
                .configure(student_portal::inbound::http::configure),
        )
        .await
    };
}
pub(crate) use init_portal;

/// Session settings with a throwaway key and plain-HTTP cookies.
pub fn session_settings() -> SessionSettings {
    SessionSettings {
        key: Key::generate(),
        cookie_secure: false,
    }
}

/// State around `students` with the fixture catalogue and demo users.
pub fn state_with(students: Arc<dyn StudentRepository>) -> HttpState {
    HttpState::new(
        students,
        Arc::new(FixtureCourseCatalogue::default()),
        Arc::new(DemoUserDirectory::default()),
    )
}

/// State backed by an empty in-memory store.
pub fn memory_state() -> HttpState {
    state_with(Arc::new(InMemoryStudentRepository::default()))
}

/// Temporary directory holding a mirror file.
pub struct MirrorDir {
    _dir: TempDir,
    path: Utf8PathBuf,
}

impl MirrorDir {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("students.json")).expect("utf8 path");
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// A fresh adapter instance over the mirror file.
    pub fn state(&self) -> HttpState {
        let repo = MirroredStudentRepository::open(&self.path).expect("open mirror");
        state_with(Arc::new(repo))
    }
}

/// The `session` cookie set by `response`, if any.
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
}

/// Value of the `Location` header.
pub fn location<B>(response: &ServiceResponse<B>) -> Option<String> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Value of the trace identifier header.
pub fn trace_id<B>(response: &ServiceResponse<B>) -> Option<String> {
    response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}
