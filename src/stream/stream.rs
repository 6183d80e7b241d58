use super::root::{RootStream, Subscription};
use crate::sync::Synchronized;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Anything a derived stream must keep alive without knowing its type.
type KeepAlive = Box<dyn Any + Send + Sync>;

enum Node<T> {
    /// A subscriber list behind a lock.
    Root(Synchronized<RootStream<T>>),
    /// Produced by a combinator. Forwards to `downstream`.
    Chained(Chained<T>),
    /// Ignores fires and subscriptions.
    Never,
}

struct Chained<T> {
    downstream: Stream<T>,
    // Sole strong owner of the callback registered on the upstream stream.
    _upstream_subscription: KeepAlive,
    _upstream: KeepAlive,
}

impl<T> Node<T> {
    fn fire(&self, value: &T) {
        match self {
            Node::Root(root) => root.with_mut(|root| root.fire(value)),
            Node::Chained(chained) => chained.downstream.node.fire(value),
            Node::Never => {}
        }
    }

    fn subscribe(&self, subscription: &Subscription<T>) {
        match self {
            Node::Root(root) => root.with_mut(|root| root.subscribe(subscription)),
            Node::Chained(chained) => chained.downstream.subscribe(subscription),
            Node::Never => {}
        }
    }

    fn subscriber_count(&self) -> usize {
        match self {
            Node::Root(root) => root.with(|root| root.len()),
            Node::Chained(chained) => chained.downstream.subscriber_count(),
            Node::Never => 0,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Node::Root(_) => "root",
            Node::Chained(_) => "chained",
            Node::Never => "never",
        }
    }
}

/// A shared handle to a node in the event graph.
///
/// Cloning is cheap and every clone refers to the same node. A stream
/// created with [`Stream::new`] is a root: fire and subscribe each take its
/// lock for their whole duration, so concurrent fires from different
/// threads are serialized.
///
/// Firing is synchronous. [`fire`](Self::fire) returns once every live
/// subscriber, and everything they fire in turn, has finished.
///
/// # Reentrancy
///
/// The lock is not reentrant. Firing or subscribing to a root stream from
/// inside one of that same stream's callbacks deadlocks. Firing *other*
/// streams from a callback is fine.
///
/// # Examples
///
/// ```
/// use sluice::{subscription, Stream};
/// use std::sync::{Arc, Mutex};
///
/// let stream = Stream::new();
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let seen_clone = seen.clone();
/// let sub = subscription(move |s: &String| seen_clone.lock().unwrap().push(s.clone()));
/// stream.subscribe(&sub);
///
/// stream.fire("hello".to_string());
/// drop(sub);
/// stream.fire("ignored".to_string());
///
/// assert_eq!(*seen.lock().unwrap(), vec!["hello".to_string()]);
/// ```
pub struct Stream<T> {
    node: Arc<Node<T>>,
}

impl<T> Stream<T> {
    /// Create a root stream with no subscribers.
    pub fn new() -> Self {
        Self::from_node(Node::Root(Synchronized::new(RootStream::new())))
    }

    /// A stream that never fires and drops every subscription.
    pub fn never() -> Self {
        Self::from_node(Node::Never)
    }

    /// Build a derived stream that keeps `upstream_subscription` and
    /// `upstream` alive for as long as it is reachable.
    pub(crate) fn chained<U>(
        upstream_subscription: Subscription<U>,
        upstream: Stream<U>,
        downstream: Stream<T>,
    ) -> Self
    where
        U: 'static,
    {
        Self::from_node(Node::Chained(Chained {
            downstream,
            _upstream_subscription: Box::new(upstream_subscription),
            _upstream: Box::new(upstream),
        }))
    }

    fn from_node(node: Node<T>) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    /// Push `value` to every live subscriber, in registration order.
    pub fn fire(&self, value: T) {
        self.node.fire(&value);
    }

    /// Register `subscription` on this stream.
    ///
    /// The stream only holds it weakly. Once every strong reference to
    /// `subscription` is dropped it stops being invoked.
    pub fn subscribe(&self, subscription: &Subscription<T>) {
        self.node.subscribe(subscription);
    }

    /// Number of subscriber entries currently registered on the underlying
    /// root, including expired entries that have not been compacted yet.
    pub fn subscriber_count(&self) -> usize {
        self.node.subscriber_count()
    }

    /// Whether both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
        }
    }
}

impl<T> Default for Stream<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("kind", &self.node.kind())
            .finish()
    }
}
