//! Session state and the simulated agent behind it.
//!
//! - [`session`] owns the conversation: history, status and the pending reply.
//! - [`reply`] runs the simulated agent as a cancellable tokio task.
//! - [`message`] defines transcript entries.
//! - [`config`] and [`settings`] load and resolve user configuration.

pub mod config;
pub mod constants;
pub mod message;
pub mod reply;
pub mod session;
pub mod settings;
