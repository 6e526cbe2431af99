//! A module containing [`Set`] and associated types.
//!
//! Some of these types provide owned and borrowed iteration over a set's elements while others are
//! lazy iterators over the result of set operations on two Sets. The eager operations on [`Set`]
//! (such as [`Set::union`]) collect these iterators into a new Set.
//!
//! There is no mutable iterator over the elements of a set because mutating the entries in place
//! would cause a logic error.
//!
//! [`Set`] is also re-exported under the parent module.

mod iter;
mod set;

pub use iter::*;
pub use set::*;
