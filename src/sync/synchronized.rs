use parking_lot::Mutex;
use std::fmt;

/// A value guarded by an exclusive lock.
///
/// All access is scoped to a single call: the lock is taken on entry and
/// released on every exit path, including unwinding out of a user closure.
/// The lock does not poison, so a cell stays usable after a panic inside
/// [`with`](Self::with) or [`with_mut`](Self::with_mut).
///
/// The lock is not reentrant. Calling back into the same cell from inside
/// one of its closures deadlocks.
///
/// # Examples
///
/// ```
/// use sluice::Synchronized;
///
/// let cell = Synchronized::new(vec![1, 2]);
/// cell.with_mut(|v| v.push(3));
/// assert_eq!(cell.get_copy(), vec![1, 2, 3]);
/// assert_eq!(cell.with(|v| v.len()), 3);
/// ```
#[derive(Default)]
pub struct Synchronized<T> {
    value: Mutex<T>,
}

impl<T> Synchronized<T> {
    /// Create a cell holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value: Mutex::new(value),
        }
    }

    /// Replace the held value.
    pub fn set(&self, value: T) {
        let previous = std::mem::replace(&mut *self.value.lock(), value);
        // Dropped outside the lock; the old value may own arbitrary state.
        drop(previous);
    }

    /// Run `f` with exclusive mutable access to the value.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.value.lock();
        f(&mut *guard)
    }

    /// Run `f` with exclusive read-only access to the value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.value.lock();
        f(&*guard)
    }

    /// Consume the cell and return the value.
    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }
}

impl<T: Clone> Synchronized<T> {
    /// Return a full copy of the current value.
    pub fn get_copy(&self) -> T {
        self.value.lock().clone()
    }
}

impl<T> From<T> for Synchronized<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Synchronized<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.try_lock() {
            Some(guard) => f.debug_tuple("Synchronized").field(&*guard).finish(),
            None => f.write_str("Synchronized(<locked>)"),
        }
    }
}
