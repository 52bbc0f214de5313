//! Terminal UI layer for interactive chat sessions.
//!
//! - [`chat_loop`]: the event loop that owns the session store and feeds it
//!   key presses and simulated replies.
//! - [`renderer`] and [`wrap`]: frame composition and transcript wrapping.
//! - [`composer`]: the message input box.

pub mod chat_loop;
pub mod composer;
pub mod renderer;
pub mod wrap;
