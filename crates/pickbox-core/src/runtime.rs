use crate::command::{Action, Command, CommandInner, TerminalCommand};
use crate::model::Model;
use crate::subscription::SubscriptionManager;
use crossterm::{
    cursor,
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::io::{self, stdout, Stdout};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// Errors that can occur while initializing or running a [`Program`].
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    /// An I/O error from terminal setup, rendering, or teardown.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// A global logger was already installed when `log_file` asked for one.
    #[error("failed to install file logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// Configuration options for a [`Program`].
///
/// Override only what you need with struct update syntax:
///
/// ```rust,ignore
/// let opts = ProgramOptions {
///     mouse_capture: true,
///     log_file: Some("select.log".into()),
///     ..ProgramOptions::default()
/// };
/// ```
pub struct ProgramOptions {
    /// Target frames per second (default: 60, clamped to 1..=120).
    pub fps: u32,
    /// Start in alternate screen (default: true).
    pub alt_screen: bool,
    /// Report mouse presses so widgets can react to clicks (default: true).
    pub mouse_capture: bool,
    /// Report terminal focus gained / lost (default: true).
    pub focus_reporting: bool,
    /// Terminal title.
    pub title: Option<String>,
    /// Restore the terminal before a panic message is printed (default: true).
    pub catch_panics: bool,
    /// Exit on Ctrl+C delivered as a signal (default: true).
    pub handle_signals: bool,
    /// Install a `simplelog` file logger writing here.
    pub log_file: Option<PathBuf>,
    /// Level for the file logger (default: `Debug`).
    pub log_level: LevelFilter,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            fps: 60,
            alt_screen: true,
            mouse_capture: true,
            focus_reporting: true,
            title: None,
            catch_panics: true,
            handle_signals: true,
            log_file: None,
            log_level: LevelFilter::Debug,
        }
    }
}

/// The program runtime. Owns the terminal, the message channel, and the
/// model, and drives the update/view loop until a [`Command::quit`].
///
/// ```rust,ignore
/// #[tokio::main]
/// async fn main() -> Result<(), ProgramError> {
///     let model = Program::<StateForm>::new(flags)?.run().await?;
///     Ok(())
/// }
/// ```
pub struct Program<M: Model> {
    model: M,
    terminal: Terminal<CrosstermBackend<Stdout>>,
    msg_tx: mpsc::UnboundedSender<M::Message>,
    msg_rx: mpsc::UnboundedReceiver<M::Message>,
    subscription_manager: SubscriptionManager<M::Message>,
    options: ProgramOptions,
    needs_redraw: bool,
    should_quit: bool,
}

impl<M: Model> Program<M> {
    /// Create a new program with default options.
    pub fn new(flags: M::Flags) -> Result<Self, ProgramError> {
        Self::with_options(flags, ProgramOptions::default())
    }

    /// Create a new program with custom options.
    ///
    /// Installs the file logger (if configured) before the model is
    /// initialized so that construction-time warnings are captured.
    pub fn with_options(flags: M::Flags, options: ProgramOptions) -> Result<Self, ProgramError> {
        if let Some(ref path) = options.log_file {
            init_file_logger(path, options.log_level)?;
        }

        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (model, init_cmd) = M::init(flags);
        let terminal = init_terminal(&options)?;
        let subscription_manager = SubscriptionManager::new(msg_tx.clone());

        let mut program = Self {
            model,
            terminal,
            msg_tx,
            msg_rx,
            subscription_manager,
            options,
            needs_redraw: true,
            should_quit: false,
        };
        log::debug!("program initialized");

        program.execute_command(init_cmd);
        let subs = program.model.subscriptions();
        program.subscription_manager.reconcile(subs);

        Ok(program)
    }

    /// Run the program until quit and hand back the final model.
    pub async fn run(mut self) -> Result<M, ProgramError> {
        let result = self.event_loop().await;

        log::debug!("shutting down");
        self.subscription_manager.shutdown();
        restore_terminal(&self.options)?;

        result.map(|()| self.model)
    }

    async fn event_loop(&mut self) -> Result<(), ProgramError> {
        self.render()?;

        let fps = self.options.fps.clamp(1, 120);
        let mut frame_interval = tokio::time::interval(Duration::from_secs_f64(1.0 / fps as f64));
        frame_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let handle_signals = self.options.handle_signals;

        loop {
            tokio::select! {
                biased;

                _ = tokio::signal::ctrl_c(), if handle_signals => {
                    log::info!("received ctrl+c signal");
                    return Ok(());
                }

                Some(msg) = self.msg_rx.recv() => {
                    self.process_message(msg);
                    // Drain whatever else is already queued before redrawing.
                    while let Ok(msg) = self.msg_rx.try_recv() {
                        self.process_message(msg);
                        if self.should_quit {
                            break;
                        }
                    }
                    if self.should_quit {
                        return Ok(());
                    }
                }

                _ = frame_interval.tick() => {
                    if self.needs_redraw {
                        self.render()?;
                        self.needs_redraw = false;
                    }
                }
            }
        }
    }

    fn process_message(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.execute_command(cmd);

        let subs = self.model.subscriptions();
        self.subscription_manager.reconcile(subs);

        self.needs_redraw = true;
    }

    fn execute_command(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Action(Action::Message(msg)) => {
                let _ = self.msg_tx.send(msg);
            }
            CommandInner::Action(Action::Quit) => {
                self.should_quit = true;
            }
            CommandInner::Future(fut) => {
                let tx = self.msg_tx.clone();
                tokio::spawn(async move {
                    let _ = tx.send(fut.await);
                });
            }
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.execute_command(cmd);
                }
            }
            CommandInner::Terminal(tcmd) => {
                if let Err(err) = execute_terminal_command(tcmd) {
                    log::warn!("terminal command failed: {err}");
                }
            }
        }
    }

    fn render(&mut self) -> Result<(), ProgramError> {
        self.terminal.draw(|frame| {
            self.model.view(frame);
        })?;
        Ok(())
    }
}

fn execute_terminal_command(cmd: TerminalCommand) -> io::Result<()> {
    let mut writer = stdout();
    match cmd {
        TerminalCommand::EnableMouseCapture => execute!(writer, EnableMouseCapture),
        TerminalCommand::DisableMouseCapture => execute!(writer, DisableMouseCapture),
        TerminalCommand::EnableFocusReporting => execute!(writer, EnableFocusChange),
        TerminalCommand::DisableFocusReporting => execute!(writer, DisableFocusChange),
        TerminalCommand::SetTitle(title) => execute!(writer, SetTitle(title)),
    }
}

/// Install a `simplelog` [`WriteLogger`] appending to `path`.
///
/// The TUI owns stdout, so diagnostics have to go to a file. Fails if a
/// global logger is already installed.
pub fn init_file_logger(path: impl AsRef<Path>, level: LevelFilter) -> Result<(), ProgramError> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}

fn init_terminal(options: &ProgramOptions) -> Result<Terminal<CrosstermBackend<Stdout>>, ProgramError> {
    if options.catch_panics {
        use std::sync::Once;
        static HOOK_INSTALLED: Once = Once::new();
        let alt_screen = options.alt_screen;
        HOOK_INSTALLED.call_once(|| {
            let original_hook = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                let _ = restore_terminal_minimal(alt_screen);
                original_hook(info);
            }));
        });
    }

    enable_raw_mode()?;
    let mut writer = stdout();

    if options.alt_screen {
        execute!(writer, EnterAlternateScreen)?;
    }
    if options.mouse_capture {
        execute!(writer, EnableMouseCapture)?;
    }
    if options.focus_reporting {
        execute!(writer, EnableFocusChange)?;
    }
    if let Some(ref title) = options.title {
        execute!(writer, SetTitle(title))?;
    }
    execute!(writer, cursor::Hide)?;

    Ok(Terminal::new(CrosstermBackend::new(writer))?)
}

fn restore_terminal(options: &ProgramOptions) -> Result<(), ProgramError> {
    restore_terminal_minimal(options.alt_screen)?;
    Ok(())
}

fn restore_terminal_minimal(alt_screen: bool) -> io::Result<()> {
    // Best effort: undo every mode even if an earlier step fails.
    let raw = disable_raw_mode();
    let mut writer = stdout();
    execute!(writer, DisableMouseCapture).ok();
    execute!(writer, DisableFocusChange).ok();
    execute!(writer, cursor::Show).ok();
    if alt_screen {
        execute!(writer, LeaveAlternateScreen).ok();
    }
    raw
}
