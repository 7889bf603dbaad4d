//! Core domain types for the hookbridge relay.
//!
//! Provides inbound event probing and classification, the reply bodies the
//! relay returns to the calling platform, the error taxonomy, and a clock
//! abstraction for testable timestamps. The delivery and API crates depend
//! on these foundational types.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod event;
pub mod reply;
pub mod time;

pub use error::{RelayError, Result};
pub use event::{EventKind, InboundEvent};
pub use reply::RelayReply;
pub use time::{Clock, RealClock, TestClock};
