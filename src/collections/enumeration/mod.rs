//! A module containing [`Enum`], a runtime registry of named variants, and the types used to
//! dispatch on it.
//!
//! Variants are registered by name and receive either an automatically incremented integer or a
//! caller-supplied [`EnumValue`]. Once [frozen](Enum::freeze), the set of variants can't change.
//!
//! Dispatch goes through [`Handlers`], a table from variant name to callback. Both
//! [`Enum::match_on`] and [`Enum::try_match`] refuse to dispatch unless every registered variant
//! has a handler, so adding a variant without updating every call site is caught the first time
//! that call site runs.

mod error;
mod handlers;
mod registry;
mod value;

pub use error::*;
pub use handlers::*;
pub use registry::*;
pub use value::*;
