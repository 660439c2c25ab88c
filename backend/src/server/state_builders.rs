//! Builders for the HTTP state ports.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use student_portal::domain::ports::{
    DemoUserDirectory, FixtureCourseCatalogue, LoginService, StudentRepository,
    StudentRepositoryError,
};
use student_portal::inbound::http::state::HttpState;
use student_portal::outbound::persistence::{InMemoryStudentRepository, MirroredStudentRepository};
use student_portal::outbound::users_file::{UserFileError, load_users};

use super::ServerConfig;

/// Reasons the configured adapters cannot be constructed.
#[derive(Debug, thiserror::Error)]
pub enum StateBuildError {
    #[error(transparent)]
    Mirror(#[from] StudentRepositoryError),
    #[error(transparent)]
    Users(#[from] UserFileError),
}

fn build_student_repository(
    config: &ServerConfig,
) -> Result<Arc<dyn StudentRepository>, StateBuildError> {
    match &config.mirror_path {
        Some(path) => {
            let repo = MirroredStudentRepository::open(path)?;
            info!(path = %repo.path(), "mirroring students to file");
            Ok(Arc::new(repo))
        }
        None => Ok(Arc::new(InMemoryStudentRepository::default())),
    }
}

fn build_login_service(config: &ServerConfig) -> Result<Arc<dyn LoginService>, StateBuildError> {
    let directory = match &config.users_file {
        Some(path) => {
            let directory = load_users(path)?;
            info!(path = %path, users = directory.len(), "loaded login users");
            directory
        }
        None => DemoUserDirectory::default(),
    };
    Ok(Arc::new(directory))
}

/// Build the shared handler state, choosing adapters from `config`.
pub fn build_http_state(config: &ServerConfig) -> Result<web::Data<HttpState>, StateBuildError> {
    Ok(web::Data::new(HttpState::new(
        build_student_repository(config)?,
        Arc::new(FixtureCourseCatalogue::default()),
        build_login_service(config)?,
    )))
}
