//! Discrete event streams.
//!
//! This module provides the event graph:
//! - [`RootStream`]: a plain, single-owner subscriber list
//! - [`Stream`]: the shared handle every combinator takes and returns
//! - Combinators: [`mapped`], [`mapped_optional`], [`filtered`], [`never`]
//!
//! Streams hold their subscribers weakly. A subscription stays active only
//! while something else keeps a strong [`Subscription`] alive.

mod combinators;
mod root;
mod stream;

pub use combinators::{filtered, mapped, mapped_optional, never};
pub use root::{subscription, RootStream, Subscription};
pub use stream::Stream;
