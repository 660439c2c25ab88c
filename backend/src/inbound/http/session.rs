//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Wraps the Actix session so handlers and the route guard only deal with
//! [`SessionUser`] values.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{Error, SessionUser};

pub(crate) const SESSION_USER_KEY: &str = "user";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Wrap an Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Store the signed-in identity and rotate the session id.
    pub fn persist_user(&self, user: &SessionUser) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(SESSION_USER_KEY, user)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// The signed-in identity, if any.
    ///
    /// A cookie whose payload no longer deserialises is treated as signed
    /// out rather than as a server error.
    pub fn current_user(&self) -> Option<SessionUser> {
        match self.0.get::<SessionUser>(SESSION_USER_KEY) {
            Ok(user) => user,
            Err(error) => {
                warn!(%error, "discarding unreadable session identity");
                None
            }
        }
    }

    /// The signed-in identity or `401 login required`.
    pub fn require_user(&self) -> Result<SessionUser, Error> {
        self.current_user()
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Drop every session entry and expire the cookie.
    pub fn clear(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
