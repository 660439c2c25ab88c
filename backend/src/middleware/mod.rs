//! Actix middleware shared by every route.

pub mod route_guard;
pub mod trace;

pub use route_guard::RouteGuard;
pub use trace::Trace;
