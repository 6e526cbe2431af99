use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error};

use super::EnumValue;

/// Returned when a key is neither the name nor the value of any registered variant.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("Enum variant doesn't exist: {key}")]
pub struct VariantNotFound {
    pub key: EnumValue,
}

/// Returned by [`Enum::try_match`](super::Enum::try_match) when some registered variants have no
/// handler. `names` is in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnattendedBranches {
    pub names: Vec<String>,
}

impl Display for UnattendedBranches {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Following branches are unattended: {}", self.names.join(","))
    }
}

impl Error for UnattendedBranches {}
