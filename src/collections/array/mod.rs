//! A module containing functional-style operations over slices.
//!
//! Every function here borrows its input and returns a freshly allocated result, so the source
//! sequence is never mutated. Callbacks receive elements by reference.

mod array;
mod error;
mod tests;

pub use array::*;
pub use error::*;
