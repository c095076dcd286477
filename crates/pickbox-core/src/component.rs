use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` mirrors [`Model`](crate::Model), except that
/// [`view`](Component::view) receives the area to draw into. The parent
/// decides where each child lives and routes messages to it.
///
/// # Composition pattern
///
/// Wrap the child's message type in a parent variant and lift returned
/// commands with [`Command::map`]:
///
/// ```rust,ignore
/// use pickbox_core::{Command, Component, Model};
/// use pickbox_select::{select, FormSelect, Select};
///
/// struct Form { state: Select<FormSelect> }
///
/// enum Msg { State(select::Message) }
///
/// impl Model for Form {
///     type Message = Msg;
///     type Flags = FormSelect;
///
///     fn init(native: FormSelect) -> (Self, Command<Msg>) {
///         let state = Select::new(native).expect("at least one option");
///         (Form { state }, Command::none())
///     }
///
///     fn update(&mut self, msg: Msg) -> Command<Msg> {
///         match msg {
///             Msg::State(m) => self.state.update(m).map(Msg::State),
///         }
///     }
///
///     fn view(&self, frame: &mut ratatui::Frame) {
///         self.state.view(frame, frame.area());
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for side effects.
    ///
    /// The parent lifts the returned command into its own message space with
    /// [`.map()`](Command::map).
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into `area` of the [`Frame`]. Implementations must stay inside
    /// the rectangle they are given, except for overlays that the parent has
    /// explicitly left room for.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Declare active subscriptions for this component. Defaults to none.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }

    /// Whether this component currently has focus. Parents use this to
    /// route keyboard input.
    fn focused(&self) -> bool {
        false
    }
}
