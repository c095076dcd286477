use crossterm::event::{KeyEvent, KeyEventKind, MouseEvent};

/// Terminal events produced by the runtime's event loop.
///
/// Delivered through the [`terminal_events`](crate::subscriptions::terminal_events)
/// subscription. Each variant wraps the corresponding crossterm payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A key press or repeat. Releases are filtered out on the way in.
    Key(KeyEvent),
    /// A mouse event (requires mouse capture).
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Terminal window gained focus (requires focus reporting).
    FocusGained,
    /// Terminal window lost focus (requires focus reporting).
    FocusLost,
    /// Bracketed paste content.
    Paste(String),
}

impl TerminalEvent {
    /// Convert a crossterm event, dropping key releases so that terminals
    /// reporting both edges don't deliver every keystroke twice.
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        use crossterm::event::Event;
        Some(match event {
            Event::Key(k) if k.kind == KeyEventKind::Release => return None,
            Event::Key(k) => TerminalEvent::Key(k),
            Event::Mouse(m) => TerminalEvent::Mouse(m),
            Event::Resize(w, h) => TerminalEvent::Resize(w, h),
            Event::FocusGained => TerminalEvent::FocusGained,
            Event::FocusLost => TerminalEvent::FocusLost,
            Event::Paste(s) => TerminalEvent::Paste(s),
        })
    }
}
