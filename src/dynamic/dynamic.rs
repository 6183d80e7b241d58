use crate::stream::{mapped_optional, never, subscription, Stream, Subscription};
use crate::sync::Synchronized;
use std::fmt;
use std::sync::Arc;

struct DynamicState<T> {
    // Declaration order is drop order: the update stream and the updater
    // both write into `current`, so they go first.
    updated: Synchronized<Stream<T>>,
    updater: Subscription<T>,
    current: Arc<Synchronized<T>>,
}

impl<T: Clone + Send + 'static> DynamicState<T> {
    fn new(updated: Stream<T>, initial: T) -> Arc<Self> {
        let current = Arc::new(Synchronized::new(initial));
        let cell = Arc::clone(&current);
        let updater = subscription(move |value: &T| cell.set(value.clone()));

        Arc::new(Self {
            updated: Synchronized::new(updated),
            updater,
            current,
        })
    }
}

/// A value that changes over time.
///
/// Holds a current value and the stream that updates it. Right after a fire
/// on the update stream returns, [`current`](Self::current) is the fired
/// value; before any fire it is the initial value.
///
/// Cloning is cheap. The dynamic keeps observing its source for as long as
/// any clone is alive.
///
/// # Examples
///
/// ```
/// use sluice::{mk_dynamic, Stream};
///
/// let names = Stream::new();
/// let latest = mk_dynamic(&names, "unset".to_string());
/// assert_eq!(latest.current(), "unset");
///
/// names.fire("Hello".to_string());
/// assert_eq!(latest.current(), "Hello");
/// ```
pub struct Dynamic<T> {
    state: Arc<DynamicState<T>>,
}

impl<T: Clone + Send + 'static> Dynamic<T> {
    /// Copy of the current value.
    pub fn current(&self) -> T {
        self.state.current.get_copy()
    }

    /// Read the current value without cloning it.
    pub fn with_current<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.state.current.with(f)
    }

    /// The stream that fires each new value.
    pub fn updated(&self) -> Stream<T> {
        self.state.updated.get_copy()
    }
}

impl<T> Clone for Dynamic<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Dynamic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dynamic")
            .field("current", &*self.state.current)
            .finish()
    }
}

/// Hold the latest value fired on `event`, starting from `initial`.
pub fn mk_dynamic<T>(event: &Stream<T>, initial: T) -> Dynamic<T>
where
    T: Clone + Send + 'static,
{
    let state = DynamicState::new(event.clone(), initial);
    event.subscribe(&state.updater);
    Dynamic { state }
}

/// Accumulate `event` into a dynamic value.
///
/// On every fire the new value is `combine(fired, previous)`, where
/// `previous` is the dynamic's value before this fire.
///
/// # Examples
///
/// ```
/// use sluice::{fold, Stream};
///
/// let amounts = Stream::new();
/// let total = fold(&amounts, 0, |amount: &i32, sum| sum + *amount);
///
/// amounts.fire(10);
/// amounts.fire(5);
/// assert_eq!(total.current(), 15);
/// ```
pub fn fold<T, R, F>(event: &Stream<T>, initial: R, combine: F) -> Dynamic<R>
where
    T: 'static,
    R: Clone + Send + 'static,
    F: Fn(&T, R) -> R + Send + Sync + 'static,
{
    // The update stream needs to read this dynamic's own value, so the state
    // is allocated first with a placeholder and the real stream swapped in.
    let state = DynamicState::new(never(), initial);
    let this = Arc::downgrade(&state);

    let updated = mapped_optional(event, move |value: &T| {
        let state = this.upgrade()?;
        let previous = state.current.get_copy();
        Some(combine(value, previous))
    });
    updated.subscribe(&state.updater);
    state.updated.set(updated);

    Dynamic { state }
}

/// Count the fires on `event`.
pub fn count<T: 'static>(event: &Stream<T>) -> Dynamic<usize> {
    fold(event, 0, |_: &T, previous| previous + 1)
}

impl<T: 'static> Stream<T> {
    /// Method form of [`mk_dynamic`].
    pub fn hold(&self, initial: T) -> Dynamic<T>
    where
        T: Clone + Send,
    {
        mk_dynamic(self, initial)
    }

    /// Method form of [`fold`].
    pub fn fold<R, F>(&self, initial: R, combine: F) -> Dynamic<R>
    where
        R: Clone + Send + 'static,
        F: Fn(&T, R) -> R + Send + Sync + 'static,
    {
        fold(self, initial, combine)
    }

    /// Method form of [`count`].
    pub fn count(&self) -> Dynamic<usize> {
        count(self)
    }
}
