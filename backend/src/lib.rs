//! Student portal backend: student records, a read-only course catalogue
//! and cookie-session login, served over Actix.
//!
//! - [`domain`] holds records, errors and the ports adapters implement.
//! - [`outbound`] holds the record store adapters and the users file loader.
//! - [`inbound`] exposes the JSON API and the guarded page endpoints.
//! - [`presentation`] builds the view models those pages return.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod presentation;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::{RouteGuard, Trace};
