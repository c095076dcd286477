use crate::event::TerminalEvent;
use crate::subscription::{Subscription, SubscriptionId};
use crossterm::event::EventStream;
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// Marker type giving the terminal event subscription its identity.
pub struct TerminalEvents;

/// Create a terminal events subscription that maps each event through `map`.
///
/// Return `Some(msg)` to forward an event to the model, `None` to discard it.
/// Every call produces the same [`SubscriptionId`], so redeclaring it after
/// each update keeps the single running reader alive; the mapping captured
/// by the first declaration stays in effect.
///
/// # Example
///
/// ```rust,ignore
/// fn subscriptions(&self) -> Vec<Subscription<Msg>> {
///     vec![terminal_events(|event| match event {
///         TerminalEvent::Key(key) => Some(Msg::Key(key)),
///         TerminalEvent::Mouse(mouse) => Some(Msg::Mouse(mouse)),
///         _ => None,
///     })]
/// }
/// ```
pub fn terminal_events<Msg: Send + 'static>(
    map: impl Fn(TerminalEvent) -> Option<Msg> + Send + Sync + 'static,
) -> Subscription<Msg> {
    let map = Arc::new(map);

    // EventStream is created inside the task: building it eagerly on every
    // subscriptions() call would poke crossterm's global reader each cycle.
    Subscription {
        id: SubscriptionId::of::<TerminalEvents>(),
        spawn: Box::new(move |tx: mpsc::UnboundedSender<Msg>| -> AbortHandle {
            let handle = tokio::spawn(async move {
                let mut stream = EventStream::new();
                while let Some(result) = stream.next().await {
                    let event = match result {
                        Ok(event) => event,
                        Err(err) => {
                            log::warn!("terminal event stream error: {err}");
                            continue;
                        }
                    };
                    let Some(msg) = TerminalEvent::from_crossterm(event).and_then(|ev| map(ev))
                    else {
                        continue;
                    };
                    if tx.send(msg).is_err() {
                        break;
                    }
                }
            });
            handle.abort_handle()
        }),
    }
}
