//! Built-in subscription sources.
//!
//! - [`terminal_events`] -- keyboard, mouse, resize, focus, and paste events
//!   read from the terminal.

mod terminal;

pub use terminal::*;
