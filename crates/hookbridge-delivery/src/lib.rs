//! Outbound forwarding for the hookbridge relay.
//!
//! One concern: POST the raw inbound body to the fixed downstream
//! automation URL with a bounded timeout, and categorize the outcome so the
//! API layer can log it. There is deliberately no retry logic and no
//! circuit breaker; the relay acknowledges the platform the same way
//! whether the forward succeeded or not.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod error;

pub use client::{ForwardClient, ForwardConfig, ForwardResponse, DOWNSTREAM_URL};
pub use error::{ForwardError, Result};
