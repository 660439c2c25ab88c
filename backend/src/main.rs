//! Backend entry-point: loads settings, wires the session layer and serves
//! the student portal.

mod server;

use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{AppSettings, ServerConfig, create_server};
use student_portal::inbound::http::session_config::{BuildMode, session_settings_from_env};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(|err| std::io::Error::other(err.to_string()))?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;
    let config = ServerConfig::new(settings, session).map_err(std::io::Error::other)?;
    info!(addr = %config.bind_addr(), "starting student portal");

    let server = create_server(config).map_err(std::io::Error::other)?;
    server.await
}
