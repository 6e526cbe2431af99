use derive_more::{Display, Error, From, IsVariant, TryInto};

use super::array::InvalidChunkSize;
use super::enumeration::{UnattendedBranches, VariantNotFound};

/// Any error produced by this crate, for callers that would rather handle a single type.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, PartialEq, Eq)]
pub enum CollectionError {
    InvalidChunkSize(InvalidChunkSize),
    VariantNotFound(VariantNotFound),
    UnattendedBranches(UnattendedBranches),
}
