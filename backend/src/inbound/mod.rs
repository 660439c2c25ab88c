//! Inbound adapters translating requests into port calls.

pub mod http;
