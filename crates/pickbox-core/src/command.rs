use futures::future::BoxFuture;
use std::time::{Duration, Instant};

/// A side effect returned from [`Model::update`](crate::Model::update),
/// [`Model::init`](crate::Model::init), or a component's `update`.
///
/// Commands describe work the runtime performs on behalf of the model:
/// delivering a follow-up message, awaiting a future (timers included),
/// changing terminal modes, or quitting.
///
/// # Examples
///
/// ```rust,ignore
/// // Do nothing:
/// let cmd = Command::none();
///
/// // Clear a search buffer one second from now:
/// let cmd = Command::tick(Duration::from_secs(1), move |_| Msg::SearchExpired(generation));
///
/// // Quit the program:
/// let cmd = Command::quit();
/// ```
pub struct Command<Msg: Send + 'static> {
    pub(crate) inner: CommandInner<Msg>,
}

pub(crate) enum CommandInner<Msg: Send + 'static> {
    None,
    Action(Action<Msg>),
    Future(BoxFuture<'static, Msg>),
    Batch(Vec<Command<Msg>>),
    Terminal(TerminalCommand),
}

/// Actions the runtime handles synchronously, without spawning a task.
pub enum Action<Msg> {
    /// Send a message immediately.
    Message(Msg),
    /// Quit the program.
    Quit,
}

/// Terminal mode changes executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalCommand {
    /// Start reporting mouse presses, releases and drags.
    EnableMouseCapture,
    /// Stop reporting mouse events.
    DisableMouseCapture,
    /// Report terminal focus gained / lost.
    EnableFocusReporting,
    /// Stop reporting focus changes.
    DisableFocusReporting,
    /// Set the terminal window title.
    SetTitle(String),
}

impl<Msg: Send + 'static> Command<Msg> {
    /// No-op command.
    pub fn none() -> Self {
        Command {
            inner: CommandInner::None,
        }
    }

    /// Send a message immediately.
    pub fn message(msg: Msg) -> Self {
        Command {
            inner: CommandInner::Action(Action::Message(msg)),
        }
    }

    /// Quit the program.
    pub fn quit() -> Self {
        Command {
            inner: CommandInner::Action(Action::Quit),
        }
    }

    /// Run multiple commands concurrently. Empty batches collapse to
    /// [`Command::none`], single-element batches to the element itself.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let mut cmds: Vec<_> = cmds.into_iter().filter(|cmd| !cmd.is_none()).collect();
        match cmds.len() {
            0 => Command::none(),
            1 => cmds.pop().unwrap_or_else(Command::none),
            _ => Command {
                inner: CommandInner::Batch(cmds),
            },
        }
    }

    /// Terminal management command.
    pub fn terminal(cmd: TerminalCommand) -> Self {
        Command {
            inner: CommandInner::Terminal(cmd),
        }
    }

    /// One-shot timer: fires once after `duration`, mapping the instant to a message.
    ///
    /// There is no handle to cancel a tick. Models that need "restart the
    /// timer" semantics tag the message with a generation and ignore stale
    /// ones when they arrive.
    pub fn tick(duration: Duration, map: impl FnOnce(Instant) -> Msg + Send + 'static) -> Self {
        Command {
            inner: CommandInner::Future(Box::pin(async move {
                tokio::time::sleep(duration).await;
                map(Instant::now())
            })),
        }
    }

    /// Transform the message type (for component composition).
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl Fn(Msg) -> NewMsg + Send + Sync + 'static,
    ) -> Command<NewMsg> {
        self.map_with(std::sync::Arc::new(f))
    }

    fn map_with<NewMsg: Send + 'static>(
        self,
        f: std::sync::Arc<dyn Fn(Msg) -> NewMsg + Send + Sync>,
    ) -> Command<NewMsg> {
        match self.inner {
            CommandInner::None => Command::none(),
            CommandInner::Action(Action::Message(msg)) => Command::message(f(msg)),
            CommandInner::Action(Action::Quit) => Command::quit(),
            CommandInner::Future(fut) => Command {
                inner: CommandInner::Future(Box::pin(async move { f(fut.await) })),
            },
            CommandInner::Batch(cmds) => Command {
                inner: CommandInner::Batch(
                    cmds.into_iter()
                        .map(|cmd| cmd.map_with(f.clone()))
                        .collect(),
                ),
            },
            CommandInner::Terminal(tcmd) => Command::terminal(tcmd),
        }
    }

    /// Start reporting mouse events.
    pub fn enable_mouse_capture() -> Self {
        Command::terminal(TerminalCommand::EnableMouseCapture)
    }

    /// Set the terminal window title.
    pub fn set_title(title: impl Into<String>) -> Self {
        Command::terminal(TerminalCommand::SetTitle(title.into()))
    }

    // --- Inspection methods (useful for testing) ---

    /// Returns `true` if this is a no-op command.
    pub fn is_none(&self) -> bool {
        matches!(self.inner, CommandInner::None)
    }

    /// Number of futures (timers included) this command would spawn,
    /// counting through batches.
    pub fn pending_futures(&self) -> usize {
        match &self.inner {
            CommandInner::Future(_) => 1,
            CommandInner::Batch(cmds) => cmds.iter().map(Command::pending_futures).sum(),
            _ => 0,
        }
    }

    /// If this command is an immediate message action, return it.
    pub fn into_message(self) -> Option<Msg> {
        match self.inner {
            CommandInner::Action(Action::Message(msg)) => Some(msg),
            _ => None,
        }
    }

    /// Every immediate message carried by this command, flattening batches.
    pub fn into_messages(self) -> Vec<Msg> {
        match self.inner {
            CommandInner::Action(Action::Message(msg)) => vec![msg],
            CommandInner::Batch(cmds) => cmds
                .into_iter()
                .flat_map(Command::into_messages)
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_none() {
        let cmd: Command<()> = Command::none();
        assert!(cmd.is_none());
        assert_eq!(cmd.pending_futures(), 0);
    }

    #[test]
    fn message_round_trips_through_into_message() {
        let cmd: Command<i32> = Command::message(42);
        assert_eq!(cmd.into_message(), Some(42));
    }

    #[test]
    fn quit_is_not_a_message() {
        let cmd: Command<i32> = Command::quit();
        assert!(matches!(cmd.inner, CommandInner::Action(Action::Quit)));
    }

    #[test]
    fn batch_drops_none_and_unwraps_single() {
        let cmd: Command<i32> = Command::batch(vec![Command::none(), Command::message(1)]);
        assert_eq!(cmd.into_message(), Some(1));

        let cmd: Command<i32> = Command::batch(vec![Command::none(), Command::none()]);
        assert!(cmd.is_none());
    }

    #[test]
    fn batch_counts_timers() {
        let cmd: Command<i32> = Command::batch(vec![
            Command::message(1),
            Command::tick(Duration::from_secs(1), |_| 2),
        ]);
        assert_eq!(cmd.pending_futures(), 1);
        assert_eq!(cmd.into_messages(), vec![1]);
    }

    #[test]
    fn map_message() {
        let cmd: Command<i32> = Command::message(42);
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert_eq!(mapped.into_message().as_deref(), Some("42"));
    }

    #[test]
    fn map_preserves_terminal_command() {
        let cmd: Command<i32> = Command::enable_mouse_capture();
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert!(matches!(
            mapped.inner,
            CommandInner::Terminal(TerminalCommand::EnableMouseCapture)
        ));
    }

    #[test]
    fn map_batch_keeps_every_message() {
        let cmd: Command<i32> = Command::batch(vec![Command::message(1), Command::message(2)]);
        let mapped: Command<i32> = cmd.map(|n| n * 10);
        assert_eq!(mapped.into_messages(), vec![10, 20]);
    }

    #[tokio::test]
    async fn tick_fires_after_duration() {
        let cmd: Command<&'static str> = Command::tick(Duration::from_millis(5), |_| "fired");
        let CommandInner::Future(fut) = cmd.inner else {
            panic!("expected a future");
        };
        assert_eq!(fut.await, "fired");
    }
}
