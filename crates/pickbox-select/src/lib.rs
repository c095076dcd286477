//! Custom select widgets for the **pickbox** TUI framework.
//!
//! A [`Select`] takes over from a native single-choice control: it snapshots
//! the control's options, hides it, and draws its own label and option list.
//! From then on every selection change is written to both, so the hidden
//! control always holds what an enclosing form would submit.
//!
//! [`Select`] implements [`pickbox_core::Component`], so it embeds in any
//! [`pickbox_core::Model`] and renders inside ordinary [`ratatui`] layouts.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`select`] | The [`Select`] component and its messages |
//! | [`state`] | Pure state machine: events in, [`Effect`]s out |
//! | [`native`] | [`NativeControl`] seam and the [`FormSelect`] form control |
//! | [`surface`] | [`Surface`] seam and the element-tree [`DomSurface`] |
//! | [`dom`] | Minimal element tree and the generated class names |
//! | [`typeahead`] | Debounced type-to-select buffer |
//! | [`scroll`] | Nearest-edge list viewport |
//! | [`focus`] | [`FocusRing`] for Tab cycling across a form's selects |

pub mod dom;
pub mod error;
pub mod focus;
pub mod native;
pub mod option;
pub mod scroll;
pub mod select;
pub mod state;
pub mod surface;
pub mod typeahead;

pub use error::SelectError;
pub use focus::{FocusMove, FocusRing};
pub use native::{FormSelect, NativeControl};
pub use option::{NativeOption, NativeRef, OptionRecord};
pub use select::{Message, Select, SelectOptions, SelectStyle};
pub use state::{Effect, Key, Panel, SelectEvent, SelectState};
pub use surface::{DomSurface, Surface};
pub use typeahead::TypeAhead;
