use derive_more::{Display, Error};

/// Returned by [`chunk`](super::chunk) when asked for groups of zero elements.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Invalid chunk size {size}, chunks must hold at least one element!")]
pub struct InvalidChunkSize {
    pub size: usize,
}
