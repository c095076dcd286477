use crate::command::{Action, Command, CommandInner};
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless harness that drives a [`Model`] without a real terminal.
///
/// Immediate messages produced by commands are queued and delivered by
/// [`drain_messages`](TestProgram::drain_messages). Futures (timers
/// included) are counted but never run: tests deliver the message a timer
/// would have produced by calling [`send`](TestProgram::send) themselves,
/// which keeps timing out of the assertions.
///
/// ```rust,ignore
/// let mut prog = TestProgram::<StateForm>::new(flags);
/// prog.send(Msg::Key(key(KeyCode::Down)));
/// prog.drain_messages();
/// assert!(prog.render_string(40, 10).contains("California"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
    scheduled_futures: usize,
    quit_requested: bool,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
            scheduled_futures: 0,
            quit_requested: false,
        };
        program.collect(init_cmd);
        program
    }

    /// Send a message, triggering a single update cycle.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect(cmd);
    }

    /// Deliver queued immediate messages until none remain.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                self.send(msg);
            }
        }
    }

    /// Get a shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a mutable reference to the model for direct test setup.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Number of futures (timers included) the model has asked the runtime
    /// to spawn so far.
    pub fn scheduled_futures(&self) -> usize {
        self.scheduled_futures
    }

    /// Whether any update returned [`Command::quit`].
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Render the model to a ratatui [`Buffer`] of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test backend never fails");
        terminal
            .draw(|frame| {
                self.model.view(frame);
            })
            .expect("test backend never fails");
        terminal.backend().buffer().clone()
    }

    /// Render the model and return the visible content as a plain string,
    /// one line per row.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }

    fn collect(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None | CommandInner::Terminal(_) => {}
            CommandInner::Action(Action::Message(msg)) => self.pending_messages.push(msg),
            CommandInner::Action(Action::Quit) => self.quit_requested = true,
            CommandInner::Future(_) => self.scheduled_futures += 1,
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect(cmd);
                }
            }
        }
    }
}

/// Flatten a rendered buffer into newline-separated rows.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area: Rect = buf.area;
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buf[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            output.push('\n');
        }
    }
    output
}
