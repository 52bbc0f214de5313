//! Shared constants used across the application

use std::time::Duration;

/// Latency the reply simulator waits before answering.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(2000);

/// Substring (matched case-insensitively) that makes a submission fail.
pub const ERROR_TRIGGER: &str = "error";

/// Error detail recorded when a submission hits [`ERROR_TRIGGER`].
pub const SIMULATED_FAILURE_DETAIL: &str =
    "Simulated failure: the agent could not process this message.";

/// Shown when the session is errored but carries no detail text.
pub const GENERIC_ERROR_FALLBACK: &str = "Something went wrong.";

pub const DEFAULT_TITLE: &str = "Chatbot UI";
pub const DEFAULT_SUBTITLE: &str = "a simple chatbot";

/// Env var consulted for the tracing filter when logging to a file.
pub const LOG_FILTER_ENV: &str = "CHATSHELL_LOG";
