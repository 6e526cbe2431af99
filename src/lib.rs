//! This crate is a small set of generic collection helpers: functional-style operations over
//! slices, a hash-backed [`Set`](collections::Set) with set algebra, and a named-variant registry
//! ([`Enum`](collections::Enum)) with exhaustiveness-checked dispatch.
//!
//! # Purpose
//! Everything here works on small, fully materialized, in-memory collections. There is no
//! laziness beyond the borrowed set-operation iterators, no I/O and no shared state. None of the
//! types provide internal synchronization, so callers that need to share one across threads must
//! wrap it themselves.
//!
//! # Error Handling
//! Most operations are total and simply return a value. Where something can go wrong the crate
//! returns a strongly typed error: small structs implementing [`Error`](std::error::Error), all of
//! which convert into [`CollectionError`](collections::CollectionError) for callers that would
//! rather handle a single type.
//!
//! The one deliberate exception is [`Enum::match_on`](collections::Enum::match_on), which panics
//! when a call site forgets to handle a registered variant. This mirrors a non-exhaustive `match`
//! being a compile error: forgetting a branch is a bug in the caller, not a runtime condition.
//! [`Enum::try_match`](collections::Enum::try_match) exposes the same check as a [`Result`] for
//! tests and tooling.
//!
//! # Logging
//! The registry reports through the [`log`] facade. Nothing is printed unless the application
//! installs a logger.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

#[cfg(test)]
pub(crate) mod util;
