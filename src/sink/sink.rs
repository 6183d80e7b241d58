use crate::stream::{subscription, Stream, Subscription};
use crate::sync::Synchronized;
use std::fmt;
use std::sync::Arc;

/// A terminal observer with a result.
pub trait Sink {
    /// What [`result`](Sink::result) produces.
    type Output;

    /// Snapshot of what the sink has observed so far.
    fn result(&self) -> Self::Output;
}

/// Runs a callback for every value fired on a stream.
///
/// Created by [`for_each`]. Observation lasts as long as this value (or a
/// clone) is alive.
#[must_use = "dropping a ForEach ends the subscription"]
pub struct ForEach<T> {
    _subscription: Subscription<T>,
    _upstream: Stream<T>,
}

impl<T> Sink for ForEach<T> {
    type Output = ();

    fn result(&self) -> Self::Output {}
}

impl<T> Clone for ForEach<T> {
    fn clone(&self) -> Self {
        Self {
            _subscription: Arc::clone(&self._subscription),
            _upstream: self._upstream.clone(),
        }
    }
}

impl<T> fmt::Debug for ForEach<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForEach").finish_non_exhaustive()
    }
}

/// Appends every value fired on a stream to a vector.
///
/// Created by [`collect`].
#[must_use = "dropping a Collector ends the subscription"]
pub struct Collector<T> {
    items: Arc<Synchronized<Vec<T>>>,
    _subscription: Subscription<T>,
    _upstream: Stream<T>,
}

impl<T> Collector<T> {
    /// Number of values collected so far.
    pub fn len(&self) -> usize {
        self.items.with(|items| items.len())
    }

    /// Whether nothing has been collected yet.
    pub fn is_empty(&self) -> bool {
        self.items.with(|items| items.is_empty())
    }
}

impl<T: Clone> Sink for Collector<T> {
    type Output = Vec<T>;

    fn result(&self) -> Vec<T> {
        self.items.get_copy()
    }
}

impl<T> Clone for Collector<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            _subscription: Arc::clone(&self._subscription),
            _upstream: self._upstream.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Collector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collector")
            .field("items", &*self.items)
            .finish_non_exhaustive()
    }
}

/// Run `f` for every value fired on `event`.
///
/// # Examples
///
/// ```
/// use sluice::{for_each, Stream};
/// use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
///
/// let clicks = Stream::new();
/// let counter = Arc::new(AtomicUsize::new(0));
/// let counter_clone = counter.clone();
///
/// let sink = for_each(&clicks, move |_: &()| {
///     counter_clone.fetch_add(1, Ordering::SeqCst);
/// });
/// clicks.fire(());
/// drop(sink);
/// clicks.fire(());
///
/// assert_eq!(counter.load(Ordering::SeqCst), 1);
/// ```
pub fn for_each<T, F>(event: &Stream<T>, f: F) -> ForEach<T>
where
    T: 'static,
    F: Fn(&T) + Send + Sync + 'static,
{
    let subscription = subscription(f);
    event.subscribe(&subscription);
    ForEach {
        _subscription: subscription,
        _upstream: event.clone(),
    }
}

/// Collect every value fired on `event`.
///
/// # Examples
///
/// ```
/// use sluice::{collect, Sink, Stream};
///
/// let words = Stream::new();
/// let all = collect(&words);
/// words.fire("a");
/// words.fire("b");
/// assert_eq!(all.result(), vec!["a", "b"]);
/// ```
pub fn collect<T>(event: &Stream<T>) -> Collector<T>
where
    T: Clone + Send + 'static,
{
    let items = Arc::new(Synchronized::new(Vec::new()));
    let target = Arc::clone(&items);
    let subscription = subscription(move |value: &T| {
        target.with_mut(|items| items.push(value.clone()));
    });
    event.subscribe(&subscription);

    Collector {
        items,
        _subscription: subscription,
        _upstream: event.clone(),
    }
}

impl<T: 'static> Stream<T> {
    /// Method form of [`for_each`].
    pub fn for_each<F>(&self, f: F) -> ForEach<T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        for_each(self, f)
    }

    /// Method form of [`collect`].
    pub fn collect(&self) -> Collector<T>
    where
        T: Clone + Send,
    {
        collect(self)
    }
}
