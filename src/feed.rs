//! Live snapshot feeds
//!
//! A [`Feed`] holds the latest immutable snapshot of some value and pushes
//! every new one to its subscribers over `std::sync::mpsc` channels. A new
//! subscriber receives the current snapshot straight away. Subscribers that
//! have been dropped are pruned on the next publish and never written to.
//!
//! Every publication carries a sequence number drawn from one process-wide
//! counter, so a consumer of several feeds can merge them in publish order.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Mutex};

use tracing::trace;

use crate::error::{StorageError, StorageResult};

static NEXT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_sequence() -> u64 {
    NEXT_SEQUENCE.fetch_add(1, Ordering::Relaxed)
}

/// A snapshot together with its publication sequence number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequenced<T> {
    pub sequence: u64,
    pub value: Arc<T>,
}

type Select<T> = Box<dyn Fn(&T) -> T + Send>;

struct Subscriber<T> {
    sender: Sender<Sequenced<T>>,
    /// Optional projection applied before sending (e.g. one period's limits)
    select: Option<Select<T>>,
}

impl<T> Subscriber<T> {
    fn deliver(&self, sequence: u64, snapshot: &Arc<T>) -> bool {
        let value = match &self.select {
            Some(select) => Arc::new(select(snapshot)),
            None => Arc::clone(snapshot),
        };
        self.sender.send(Sequenced { sequence, value }).is_ok()
    }
}

struct FeedState<T> {
    current: Arc<T>,
    sequence: u64,
    subscribers: Vec<Subscriber<T>>,
}

/// Publisher side of a live snapshot sequence
pub struct Feed<T> {
    name: &'static str,
    state: Mutex<FeedState<T>>,
}

impl<T: Send + Sync + 'static> Feed<T> {
    /// Create a feed holding an initial snapshot
    pub fn new(name: &'static str, initial: T) -> Self {
        Self {
            name,
            state: Mutex::new(FeedState {
                current: Arc::new(initial),
                sequence: next_sequence(),
                subscribers: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> StorageResult<std::sync::MutexGuard<'_, FeedState<T>>> {
        self.state
            .lock()
            .map_err(|e| StorageError::Lock(format!("Failed to acquire {} feed: {}", self.name, e)))
    }

    /// The latest published snapshot
    pub fn current(&self) -> StorageResult<Arc<T>> {
        Ok(Arc::clone(&self.lock()?.current))
    }

    /// Subscribe to every future snapshot, starting with the current one
    pub fn subscribe(&self) -> StorageResult<Subscription<T>> {
        self.register(None)
    }

    /// Subscribe to a projection of every snapshot
    pub fn subscribe_with<F>(&self, select: F) -> StorageResult<Subscription<T>>
    where
        F: Fn(&T) -> T + Send + 'static,
    {
        self.register(Some(Box::new(select)))
    }

    fn register(&self, select: Option<Select<T>>) -> StorageResult<Subscription<T>> {
        let (sender, receiver) = mpsc::channel();
        let subscriber = Subscriber { sender, select };

        let mut state = self.lock()?;
        // The receiver is alive, so the first delivery cannot fail
        subscriber.deliver(state.sequence, &state.current);
        state.subscribers.push(subscriber);

        Ok(Subscription {
            name: self.name,
            receiver,
        })
    }

    /// Replace the current snapshot and push it to all live subscribers
    ///
    /// Returns the number of subscribers that received it.
    pub fn publish(&self, value: T) -> StorageResult<usize> {
        let mut state = self.lock()?;
        state.current = Arc::new(value);
        state.sequence = next_sequence();

        let snapshot = Arc::clone(&state.current);
        let sequence = state.sequence;
        let before = state.subscribers.len();
        state.subscribers.retain(|s| s.deliver(sequence, &snapshot));

        let delivered = state.subscribers.len();
        if delivered < before {
            trace!(feed = self.name, pruned = before - delivered, "dropped closed subscriptions");
        }
        Ok(delivered)
    }

    /// Number of subscribers still registered
    pub fn subscriber_count(&self) -> StorageResult<usize> {
        Ok(self.lock()?.subscribers.len())
    }
}

/// Consumer side of a live snapshot sequence
///
/// Dropping the subscription unsubscribes it.
pub struct Subscription<T> {
    name: &'static str,
    receiver: Receiver<Sequenced<T>>,
}

impl<T> Subscription<T> {
    /// The next pending snapshot with its sequence number, without blocking
    pub fn try_next_sequenced(&self) -> StorageResult<Option<Sequenced<T>>> {
        match self.receiver.try_recv() {
            Ok(item) => Ok(Some(item)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(StorageError::FeedClosed(self.name)),
        }
    }

    /// The next pending snapshot, if any, without blocking
    pub fn try_next(&self) -> StorageResult<Option<Arc<T>>> {
        Ok(self.try_next_sequenced()?.map(|item| item.value))
    }

    /// All pending snapshots with their sequence numbers, oldest first
    pub fn drain_sequenced(&self) -> StorageResult<Vec<Sequenced<T>>> {
        let mut pending = Vec::new();
        while let Some(item) = self.try_next_sequenced()? {
            pending.push(item);
        }
        Ok(pending)
    }

    /// All pending snapshots in publication order
    pub fn drain(&self) -> StorageResult<Vec<Arc<T>>> {
        Ok(self
            .drain_sequenced()?
            .into_iter()
            .map(|item| item.value)
            .collect())
    }

    /// The most recent pending snapshot, skipping older ones
    pub fn latest(&self) -> StorageResult<Option<Arc<T>>> {
        Ok(self.drain()?.pop())
    }

    /// Block until the next snapshot arrives
    pub fn recv(&self) -> StorageResult<Arc<T>> {
        self.receiver
            .recv()
            .map(|item| item.value)
            .map_err(|_| StorageError::FeedClosed(self.name))
    }
}
