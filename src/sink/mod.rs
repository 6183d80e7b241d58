//! Terminal observers.
//!
//! A sink keeps a subscription alive for as long as the sink itself is
//! alive. Drop it to stop observing.

mod sink;

pub use sink::{collect, for_each, Collector, ForEach, Sink};
