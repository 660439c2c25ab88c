//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: student stores, in memory or mirrored to a JSON file
//! - **users_file**: loads the login directory from a JSON file
//!
//! Adapters are thin translators between domain types and their stored
//! representation. They contain no business logic.

pub mod persistence;
pub mod users_file;
