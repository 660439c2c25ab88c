//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::{AppSettings, ServerConfig, SettingsError};
pub use state_builders::StateBuildError;

use state_builders::build_http_state;

use actix_web::dev::Server;
use actix_web::{App, HttpServer};

#[cfg(debug_assertions)]
use student_portal::ApiDoc;
use student_portal::inbound::http::configure;
use student_portal::{RouteGuard, Trace};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Reasons the server cannot start.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    State(#[from] StateBuildError),
    #[error("failed to bind or start the server: {0}")]
    Io(#[from] std::io::Error),
}

/// Construct an Actix HTTP server from `config`.
///
/// # Errors
/// Fails when an adapter cannot be built (unreadable users file, unusable
/// mirror directory) or when binding the socket fails.
pub fn create_server(config: ServerConfig) -> Result<Server, StartupError> {
    let http_state = build_http_state(&config)?;
    let bind_addr = config.bind_addr();
    let session = config.session;

    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(http_state.clone())
            .wrap(RouteGuard)
            .wrap(session.middleware())
            .wrap(Trace)
            .configure(configure);

        #[cfg(debug_assertions)]
        let app =
            app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

        app
    })
    .bind(bind_addr)?
    .run();
    Ok(server)
}
