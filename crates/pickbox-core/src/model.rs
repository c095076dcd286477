use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::Frame;

/// The top-level application trait, following the Elm architecture.
///
/// The runtime drives an **init -> view -> update** cycle:
///
/// 1. [`init`](Model::init) builds the initial state from `Flags` and may
///    return a startup [`Command`].
/// 2. [`view`](Model::view) draws the current state.
/// 3. Events arrive as messages through [`Subscription`]s or commands.
/// 4. [`update`](Model::update) handles each message and may return a
///    [`Command`].
///
/// Steps 2-4 repeat until a command quits the program.
pub trait Model: Sized + Send + 'static {
    /// The application's message type.
    type Message: Send + 'static;

    /// Initialization data passed to [`Model::init`]. Use `()` when none is
    /// needed.
    type Flags: Send + 'static;

    /// Create the initial model state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Process a message, mutate state, and return a command for side effects.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state. Must be a pure function of `&self`.
    fn view(&self, frame: &mut Frame);

    /// Declare active subscriptions. Called after every update; the runtime
    /// diffs the result against the running set.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }
}
