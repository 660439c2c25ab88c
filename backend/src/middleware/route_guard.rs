//! Session-aware redirects for page paths.
//!
//! [`RouteGuard`] asks [`crate::domain::route_guard::decide`] what to do with
//! each request. It must sit inside the session middleware so the session is
//! readable; register it with `.wrap` before the session layer.

use std::task::{Context, Poll};

use actix_session::SessionExt;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::LOCATION;
use actix_web::{Error, HttpResponse};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{debug, warn};

use crate::domain::SessionUser;
use crate::domain::route_guard::{GuardDecision, decide};
use crate::inbound::http::session::SESSION_USER_KEY;

/// Middleware factory redirecting requests the session does not entitle.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use student_portal::middleware::RouteGuard;
///
/// let app = App::new().wrap(RouteGuard);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct RouteGuard;

impl<S, B> Transform<S, ServiceRequest> for RouteGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RouteGuardMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RouteGuardMiddleware { service }))
    }
}

/// Service wrapper produced by [`RouteGuard`].
pub struct RouteGuardMiddleware<S> {
    service: S,
}

fn has_session(req: &ServiceRequest) -> bool {
    match req.get_session().get::<SessionUser>(SESSION_USER_KEY) {
        Ok(user) => user.is_some(),
        Err(error) => {
            warn!(%error, "treating unreadable session as signed out");
            false
        }
    }
}

impl<S, B> Service<ServiceRequest> for RouteGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match decide(req.path(), has_session(&req)) {
            GuardDecision::Pass => {
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            GuardDecision::Redirect(location) => {
                debug!(path = %req.path(), %location, "route guard redirect");
                let response = HttpResponse::Found()
                    .insert_header((LOCATION, location))
                    .finish();
                let res = req.into_response(response).map_into_right_body();
                Box::pin(ready(Ok(res)))
            }
        }
    }
}
