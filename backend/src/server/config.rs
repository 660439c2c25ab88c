//! Process settings loaded via OrthoConfig, and the validated server
//! configuration built from them.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::Deserialize;

use student_portal::inbound::http::session_config::SessionSettings;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Settings read from CLI flags, `PORTAL_*` environment variables and an
/// optional config file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PORTAL")]
pub struct AppSettings {
    /// Address to listen on.
    pub host: Option<String>,
    /// Port to listen on.
    pub port: Option<u16>,
    /// JSON file mirroring the student list; unset keeps records in memory
    /// only.
    pub mirror_path: Option<PathBuf>,
    /// JSON file listing login users; unset uses the two demo accounts.
    pub users_file: Option<PathBuf>,
}

/// Reasons [`AppSettings`] cannot be turned into a [`ServerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid host '{host}': {source}")]
    Host {
        host: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("{setting} is not valid UTF-8: {path}")]
    NonUtf8Path { setting: &'static str, path: String },
}

fn utf8_path(setting: &'static str, path: PathBuf) -> Result<Utf8PathBuf, SettingsError> {
    Utf8PathBuf::from_path_buf(path).map_err(|path| SettingsError::NonUtf8Path {
        setting,
        path: path.display().to_string(),
    })
}

impl AppSettings {
    /// Socket address from `host` and `port`, with defaults applied.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        let ip: IpAddr = host.parse().map_err(|source| SettingsError::Host {
            host: host.to_owned(),
            source,
        })?;
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_PORT)))
    }
}

/// Everything needed to start the HTTP server.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) mirror_path: Option<Utf8PathBuf>,
    pub(crate) users_file: Option<Utf8PathBuf>,
}

impl ServerConfig {
    /// Validate `settings` and pair them with the session settings.
    pub fn new(settings: AppSettings, session: SessionSettings) -> Result<Self, SettingsError> {
        let bind_addr = settings.bind_addr()?;
        let mirror_path = settings
            .mirror_path
            .map(|path| utf8_path("mirror_path", path))
            .transpose()?;
        let users_file = settings
            .users_file
            .map(|path| utf8_path("users_file", path))
            .transpose()?;
        Ok(Self {
            session,
            bind_addr,
            mirror_path,
            users_file,
        })
    }

    /// Return the socket address the server will bind to.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
