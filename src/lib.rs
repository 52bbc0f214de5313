//! Chatshell is a terminal chat shell that talks to a simulated agent.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the session store, the reply simulator, messages, and
//!   configuration.
//! - [`ui`] renders the terminal interface and runs the interactive event loop
//!   that feeds key presses and simulated replies into the session store.
//! - [`cli`] parses arguments and dispatches to the chat loop, the headless
//!   `say` command, or config editing.
//! - [`utils`] holds file logging setup.
//!
//! The binary (`src/main.rs`) routes through [`crate::cli::main`].

pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
