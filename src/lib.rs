//! kollect: a small collection utility library over script-style dynamic
//! values.
//!
//! The [`Value`] type models loosely typed data (numbers, strings, booleans,
//! arrays, objects, null, undefined) with reference semantics for arrays and
//! objects. The [`collections`] module provides the classic utility
//! operations over it: `identity`, `first`, `last`, `each`, `index_of`,
//! `filter`, `reject`, `uniq`, `map`, `pluck`, and `reduce`, each written
//! with its own explicit iteration.

pub mod collections;
pub mod types;

pub use collections::{
    each, filter, first, identity, index_of, last, map, pluck, reduce, reject, uniq,
};
pub use types::Value;
