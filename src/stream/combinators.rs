use super::root::{subscription, Subscription};
use super::stream::Stream;

/// Derive a stream that fires `f(value)` for every upstream value where
/// `f` returns `Some`.
///
/// The returned stream is the only strong owner of the callback registered
/// on `upstream`. Drop it (and everything derived from it) and upstream
/// fires silently stop reaching it.
///
/// # Examples
///
/// ```
/// use sluice::{collect, mapped_optional, Sink, Stream};
///
/// let input: Stream<&str> = Stream::new();
/// let numbers = mapped_optional(&input, |s: &&str| s.parse::<i32>().ok());
/// let collected = collect(&numbers);
///
/// input.fire("1");
/// input.fire("x");
/// input.fire("3");
/// assert_eq!(collected.result(), vec![1, 3]);
/// ```
pub fn mapped_optional<T, U, F>(upstream: &Stream<T>, f: F) -> Stream<U>
where
    T: 'static,
    U: 'static,
    F: Fn(&T) -> Option<U> + Send + Sync + 'static,
{
    let downstream = Stream::new();
    let target = downstream.clone();
    let callback: Subscription<T> = subscription(move |value: &T| {
        if let Some(result) = f(value) {
            target.fire(result);
        }
    });
    upstream.subscribe(&callback);
    Stream::chained(callback, upstream.clone(), downstream)
}

/// Derive a stream that fires `f(value)` for every upstream value.
pub fn mapped<T, U, F>(upstream: &Stream<T>, f: F) -> Stream<U>
where
    T: 'static,
    U: 'static,
    F: Fn(&T) -> U + Send + Sync + 'static,
{
    mapped_optional(upstream, move |value: &T| Some(f(value)))
}

/// Derive a stream that forwards only the upstream values matching `pred`.
pub fn filtered<T, F>(upstream: &Stream<T>, pred: F) -> Stream<T>
where
    T: Clone + 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    mapped_optional(upstream, move |value: &T| {
        if pred(value) {
            Some(value.clone())
        } else {
            None
        }
    })
}

/// A stream that never fires.
pub fn never<T>() -> Stream<T> {
    Stream::never()
}

impl<T: 'static> Stream<T> {
    /// Method form of [`mapped`].
    pub fn map<U, F>(&self, f: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        mapped(self, f)
    }

    /// Method form of [`mapped_optional`].
    pub fn filter_map<U, F>(&self, f: F) -> Stream<U>
    where
        U: 'static,
        F: Fn(&T) -> Option<U> + Send + Sync + 'static,
    {
        mapped_optional(self, f)
    }

    /// Method form of [`filtered`].
    pub fn filter<F>(&self, pred: F) -> Stream<T>
    where
        T: Clone,
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        filtered(self, pred)
    }
}
