//! Generic collection helpers.
//!
//! # Contents
//! - [`array`]: stateless, non-mutating operations over slices.
//! - [`set`]: [`Set`], an unordered collection of unique elements backed by a hash table.
//! - [`enumeration`]: [`Enum`], a registry of named variants with exhaustive dispatch.
//!
//! The most commonly used items are re-exported here.

pub mod array;
pub mod enumeration;
pub mod error;
pub mod set;

#[doc(inline)]
pub use array::{chunk, filter, find, find_by, flatten, for_each, map, reduce, reverse, unique};
#[doc(inline)]
pub use enumeration::{Enum, EnumValue, Handlers};
#[doc(inline)]
pub use error::CollectionError;
#[doc(inline)]
pub use set::Set;
