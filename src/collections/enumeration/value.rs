use derive_more::{Display, From, IsVariant};

/// The value assigned to a variant of an [`Enum`](super::Enum).
///
/// Automatically assigned values are always [`EnumValue::Int`]. Explicit values may be either
/// kind, but only integers take part in automatic numbering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, IsVariant)]
pub enum EnumValue {
    #[display("{_0}")]
    Int(i64),
    #[display("{_0:?}")]
    Text(String),
}

impl EnumValue {
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            EnumValue::Int(value) => Some(*value),
            EnumValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            EnumValue::Int(_) => None,
            EnumValue::Text(value) => Some(value),
        }
    }
}

impl From<i32> for EnumValue {
    fn from(value: i32) -> Self {
        EnumValue::Int(value.into())
    }
}

impl From<u32> for EnumValue {
    fn from(value: u32) -> Self {
        EnumValue::Int(value.into())
    }
}

impl From<&str> for EnumValue {
    fn from(value: &str) -> Self {
        EnumValue::Text(value.to_owned())
    }
}
