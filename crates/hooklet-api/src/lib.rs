//! Hooklet HTTP API.
//!
//! The first cut of the relay: one route, challenge echo or forward, and an
//! unconditional `{"success": true}` acknowledgment. Superseded by the
//! hookbridge crates but kept alongside them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod handlers;
pub mod server;

pub use server::{create_router, start_server};
