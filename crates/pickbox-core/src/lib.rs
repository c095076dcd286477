//! Core runtime for the **pickbox** select widgets.
//!
//! `pickbox-core` is a small Elm-architecture runtime on top of
//! [`ratatui`] and [`crossterm`]: state changes happen in `update`, drawing in
//! `view`, and everything asynchronous (terminal input, timers) comes back
//! in as a message.
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / update / view) |
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Side effect for the runtime to perform |
//! | [`Subscription`] | Long-lived event source (terminal events) |
//! | [`Program`] | Wires a [`Model`] to a real terminal and drives the event loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit tests |
//!
//! Diagnostics go through the [`log`] facade. A TUI owns the terminal, so
//! [`ProgramOptions::log_file`] installs a `simplelog` file logger.

pub mod command;
pub mod component;
pub mod event;
pub mod model;
pub mod runtime;
pub mod subscription;
pub mod subscriptions;
pub mod testing;

pub use command::{Command, TerminalCommand};
pub use component::Component;
pub use event::TerminalEvent;
pub use model::Model;
pub use runtime::{init_file_logger, Program, ProgramError, ProgramOptions};
pub use subscription::{Subscription, SubscriptionId};
pub use subscriptions::terminal_events;

/// Run a pickbox application with default options.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run().await
}

/// Run with custom options.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
