use std::sync::RwLock;

/// Which collection changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreEvent {
    InventoryUpdated,
    ShoppingUpdated,
    SavedRecipesUpdated,
    VideosUpdated,
}

type Subscriber = Box<dyn Fn(StoreEvent) + Send + Sync>;

/// Synchronous fan-out of change notifications.
///
/// Subscribers run on the publishing thread, after the change has been
/// written, in subscription order.
#[derive(Default)]
pub struct EventBus {
    subscribers: RwLock<Vec<Subscriber>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, subscriber: F)
    where
        F: Fn(StoreEvent) + Send + Sync + 'static,
    {
        match self.subscribers.write() {
            Ok(mut subscribers) => subscribers.push(Box::new(subscriber)),
            Err(_) => tracing::warn!("Event bus lock poisoned, subscriber dropped"),
        }
    }

    pub fn publish(&self, event: StoreEvent) {
        let Ok(subscribers) = self.subscribers.read() else {
            tracing::warn!(?event, "Event bus lock poisoned, event dropped");
            return;
        };
        for subscriber in subscribers.iter() {
            subscriber(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().map(|s| s.len()).unwrap_or(0)
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
