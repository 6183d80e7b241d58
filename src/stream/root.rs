use std::fmt;
use std::sync::{Arc, Weak};

/// A callback registered on a stream.
///
/// Streams only keep a [`Weak`] reference to it; whoever created the
/// subscription decides how long it stays active by holding this `Arc`.
pub type Subscription<T> = Arc<dyn Fn(&T) + Send + Sync>;

type WeakSubscription<T> = Weak<dyn Fn(&T) + Send + Sync>;

/// Wrap a closure as a [`Subscription`].
pub fn subscription<T, F>(f: F) -> Subscription<T>
where
    F: Fn(&T) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// A subscriber list owned by a single caller.
///
/// This is the unsynchronized root of the event graph: `fire` and
/// `subscribe` need `&mut self`. [`Stream`](super::Stream) wraps one behind
/// a lock to share it between threads.
///
/// # Examples
///
/// ```
/// use sluice::{subscription, RootStream};
/// use std::sync::{Arc, Mutex};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let seen_clone = seen.clone();
/// let sub = subscription(move |v: &i32| seen_clone.lock().unwrap().push(*v));
///
/// let mut root = RootStream::new();
/// root.subscribe(&sub);
/// root.fire(&1);
/// drop(sub);
/// root.fire(&2);
///
/// assert_eq!(*seen.lock().unwrap(), vec![1]);
/// assert!(root.is_empty());
/// ```
pub struct RootStream<T> {
    subscribers: Vec<WeakSubscription<T>>,
}

impl<T> RootStream<T> {
    /// Create a stream with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Invoke every live subscriber with `value`, in registration order.
    ///
    /// Expired subscribers are skipped, then removed once the pass is done.
    /// If a subscriber panics the panic propagates and the remaining
    /// subscribers of this pass are not invoked.
    pub fn fire(&mut self, value: &T) {
        #[cfg(feature = "tracing")]
        tracing::trace!(subscribers = self.subscribers.len(), "firing");

        let mut expired = false;
        for subscriber in &self.subscribers {
            match subscriber.upgrade() {
                Some(callback) => callback(value),
                None => expired = true,
            }
        }

        if expired {
            self.compact();
        }
    }

    /// Register `subscription` without extending its lifetime.
    ///
    /// Registering the same subscription twice invokes it twice per fire.
    pub fn subscribe(&mut self, subscription: &Subscription<T>) {
        self.subscribers.push(Arc::downgrade(subscription));

        #[cfg(feature = "tracing")]
        tracing::trace!(subscribers = self.subscribers.len(), "subscribed");
    }

    /// Number of registered entries, including expired ones not yet removed.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Whether no entries are registered.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    fn compact(&mut self) {
        #[cfg(feature = "tracing")]
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.strong_count() > 0);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            removed = before - self.subscribers.len(),
            remaining = self.subscribers.len(),
            "dropped expired subscribers"
        );
    }
}

impl<T> Default for RootStream<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RootStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootStream")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
