//! Lock-protected shared state.
//!
//! Every piece of mutable state in the graph (subscriber lists, dynamic
//! values, collected items) lives behind its own [`Synchronized`] cell.
//! There is no global lock.

mod synchronized;

pub use synchronized::Synchronized;
