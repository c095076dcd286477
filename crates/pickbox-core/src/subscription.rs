use futures::stream::BoxStream;
use futures::StreamExt;
use std::any::TypeId;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// A long-lived event source managed by the runtime.
///
/// Subscriptions are declared in [`Model::subscriptions`](crate::Model::subscriptions)
/// after every update. The runtime starts the ones it has not seen, keeps the
/// ones whose [`SubscriptionId`] is unchanged, and aborts the rest.
pub struct Subscription<Msg: Send + 'static> {
    pub(crate) id: SubscriptionId,
    pub(crate) spawn: Box<dyn FnOnce(mpsc::UnboundedSender<Msg>) -> AbortHandle + Send>,
}

/// Identity used to diff subscriptions between update cycles: a [`TypeId`]
/// plus a numeric discriminant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId {
    type_id: TypeId,
    discriminant: u64,
}

impl SubscriptionId {
    /// Create an ID from a type and a numeric discriminant.
    pub fn new<T: 'static>(discriminant: u64) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            discriminant,
        }
    }

    /// Create an ID from a type alone (for singletons).
    pub fn of<T: 'static>() -> Self {
        Self::new::<T>(0)
    }
}

impl<Msg: Send + 'static> Subscription<Msg> {
    /// Create from a raw stream and id. The stream is polled on a tokio task
    /// until it ends or the subscription is dropped from the declared set.
    pub fn from_stream(id: SubscriptionId, stream: BoxStream<'static, Msg>) -> Self {
        Subscription {
            id,
            spawn: Box::new(move |tx| {
                let handle = tokio::spawn(forward(stream, tx));
                handle.abort_handle()
            }),
        }
    }

    /// The identity this subscription is diffed by.
    pub fn id(&self) -> &SubscriptionId {
        &self.id
    }

    /// Transform the message type (for component composition).
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl Fn(Msg) -> NewMsg + Send + Sync + 'static,
    ) -> Subscription<NewMsg> {
        let f = std::sync::Arc::new(f);
        Subscription {
            id: self.id,
            spawn: Box::new(move |new_tx: mpsc::UnboundedSender<NewMsg>| {
                let (inner_tx, mut inner_rx) = mpsc::unbounded_channel::<Msg>();
                let abort = (self.spawn)(inner_tx);

                // Ends on its own once the source is aborted and inner_tx drops.
                tokio::spawn(async move {
                    while let Some(msg) = inner_rx.recv().await {
                        if new_tx.send(f(msg)).is_err() {
                            break;
                        }
                    }
                });

                abort
            }),
        }
    }
}

async fn forward<Msg: Send + 'static>(
    mut stream: BoxStream<'static, Msg>,
    tx: mpsc::UnboundedSender<Msg>,
) {
    while let Some(msg) = stream.next().await {
        if tx.send(msg).is_err() {
            break;
        }
    }
}

/// Manages active subscriptions, performing diffing between cycles.
pub(crate) struct SubscriptionManager<Msg: Send + 'static> {
    active: HashMap<SubscriptionId, AbortHandle>,
    msg_tx: mpsc::UnboundedSender<Msg>,
}

impl<Msg: Send + 'static> SubscriptionManager<Msg> {
    pub fn new(msg_tx: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            active: HashMap::new(),
            msg_tx,
        }
    }

    /// Start new subscriptions, stop removed ones, keep unchanged ones.
    pub fn reconcile(&mut self, subs: Vec<Subscription<Msg>>) {
        let mut declared: HashMap<SubscriptionId, Subscription<Msg>> = subs
            .into_iter()
            .map(|sub| (sub.id.clone(), sub))
            .collect();

        self.active.retain(|id, handle| {
            let keep = declared.contains_key(id);
            if !keep {
                log::trace!("stopping subscription {id:?}");
                handle.abort();
            }
            keep
        });

        for (id, sub) in declared.drain() {
            if !self.active.contains_key(&id) {
                log::trace!("starting subscription {id:?}");
                let handle = (sub.spawn)(self.msg_tx.clone());
                self.active.insert(id, handle);
            }
        }
    }

    /// Abort all active subscriptions.
    pub fn shutdown(&mut self) {
        for (_, handle) in self.active.drain() {
            handle.abort();
        }
    }

    #[cfg(test)]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending(id: SubscriptionId) -> Subscription<i32> {
        Subscription::from_stream(id, Box::pin(futures::stream::pending()))
    }

    #[test]
    fn ids_compare_by_type_and_discriminant() {
        assert_eq!(SubscriptionId::of::<String>(), SubscriptionId::of::<String>());
        assert_ne!(SubscriptionId::of::<String>(), SubscriptionId::of::<i32>());
        assert_ne!(
            SubscriptionId::new::<String>(1),
            SubscriptionId::new::<String>(2)
        );
    }

    #[tokio::test]
    async fn reconcile_starts_and_stops() {
        let (tx, _rx) = mpsc::unbounded_channel::<i32>();
        let mut manager = SubscriptionManager::new(tx);

        manager.reconcile(vec![pending(SubscriptionId::of::<String>())]);
        assert_eq!(manager.active_count(), 1);

        manager.reconcile(vec![]);
        assert_eq!(manager.active_count(), 0);
    }

    #[tokio::test]
    async fn reconcile_keeps_unchanged_ids() {
        let (tx, _rx) = mpsc::unbounded_channel::<i32>();
        let mut manager = SubscriptionManager::new(tx);

        manager.reconcile(vec![pending(SubscriptionId::of::<String>())]);
        manager.reconcile(vec![pending(SubscriptionId::of::<String>())]);
        assert_eq!(manager.active_count(), 1);
    }

    #[tokio::test]
    async fn forwarded_stream_reaches_channel() {
        let (tx, mut rx) = mpsc::unbounded_channel::<i32>();
        let mut manager = SubscriptionManager::new(tx);

        let sub = Subscription::from_stream(
            SubscriptionId::of::<u8>(),
            Box::pin(futures::stream::iter(vec![1, 2])),
        )
        .map(|n| n * 2);
        manager.reconcile(vec![sub]);

        assert_eq!(rx.recv().await, Some(2));
        assert_eq!(rx.recv().await, Some(4));
        manager.shutdown();
        assert_eq!(manager.active_count(), 0);
    }
}
