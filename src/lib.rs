//! # Sluice
//!
//! Synchronous reactive event streams for Rust.
//!
//! Sluice provides two primitives and a handful of combinators for wiring
//! them into a graph:
//!
//! ## Streams (discrete)
//!
//! - `Stream<T>` - Fire values into it; every live subscriber sees them in
//!   registration order, synchronously, on the firing thread
//! - `mapped`, `mapped_optional`, `filtered`, `never` - Derived streams
//!
//! ## Dynamics (continuous)
//!
//! - `Dynamic<T>` - A current value plus the stream that updates it
//! - `mk_dynamic`, `fold`, `count` - Build a dynamic from a stream
//!
//! ## Sinks
//!
//! - `for_each` - Run a side effect per value
//! - `collect` - Gather every value into a vector
//!
//! ## Lifetimes
//!
//! Streams hold subscribers weakly. A derived stream, dynamic or sink keeps
//! observing only while something holds it; once the last handle is
//! dropped, its upstream subscription silently stops firing. There is no
//! explicit unsubscribe.
//!
//! ```
//! use sluice::{count, for_each, Stream};
//! use std::sync::{Arc, Mutex};
//!
//! let msgs: Stream<String> = Stream::new();
//! let counts = Arc::new(Mutex::new(Vec::new()));
//!
//! let n = count(&msgs);
//! let counts_clone = counts.clone();
//! let _even = n
//!     .updated()
//!     .filter(|c: &usize| c % 2 == 0)
//!     .for_each(move |c: &usize| counts_clone.lock().unwrap().push(*c));
//!
//! msgs.fire("Hello".to_string());
//! msgs.fire("There".to_string());
//!
//! assert_eq!(n.current(), 2);
//! assert_eq!(*counts.lock().unwrap(), vec![2]);
//! ```
//!
//! ## Logging
//!
//! With the `tracing` feature enabled, subscribe and fire passes are traced
//! and removal of expired subscribers is logged at debug level.

pub mod dynamic;
pub mod sink;
pub mod stream;
pub mod sync;

// Re-export main types for convenience
pub use dynamic::{count, fold, mk_dynamic, Dynamic};
pub use sink::{collect, for_each, Collector, ForEach, Sink};
pub use stream::{
    filtered, mapped, mapped_optional, never, subscription, RootStream, Stream, Subscription,
};
pub use sync::Synchronized;
