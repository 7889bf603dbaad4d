//! Request handlers.

pub mod relay;

pub use relay::relay_webhook;
