//! Continuous values fed by a stream.
//!
//! A [`Dynamic`] always has a current value and an update stream that
//! fires whenever the value changes. Build one with [`mk_dynamic`],
//! [`fold`] or [`count`].

mod dynamic;

pub use dynamic::{count, fold, mk_dynamic, Dynamic};
