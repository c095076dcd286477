//! **pickbox** -- accessible custom select widgets for [`ratatui`].
//!
//! This is the umbrella crate that re-exports everything you need from a
//! single dependency:
//!
//! ```toml
//! [dependencies]
//! pickbox = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`pickbox_core`] are available at the crate root
//!   ([`Model`], [`Component`], [`Command`], [`Subscription`], [`Program`],
//!   [`run`], [`run_with`], etc.).
//! * The [`select`] module re-exports everything from [`pickbox_select`]
//!   ([`Select`](select::Select), [`FormSelect`](select::FormSelect),
//!   the state machine and surfaces).
//! * [`ratatui`], [`crossterm`], and [`tokio`] are re-exported so downstream
//!   crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use pickbox::select::{FormSelect, Select};
//!
//! let native = FormSelect::new("state")
//!     .with_option("OH", "Ohio")
//!     .with_selected_option("CA", "California");
//!
//! let mut select = Select::new(native)?;
//! select.select_value("OH")?;
//! assert_eq!(select.native().form_value(), Some(("state", "OH")));
//! ```
//!
//! See `demos/state_form.rs` for a full program with two selects, Tab
//! focus cycling and mouse support.

pub use pickbox_core::*;
pub mod select {
    pub use pickbox_select::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;
