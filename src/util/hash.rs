use std::hash::{BuildHasher, Hasher};

/// A Hasher that sends every value to the same bucket, so that correctness can't lean on hashes
/// being distinct.
#[derive(Debug)]
pub struct CollidingHasher {
    written: u64,
}

impl Hasher for CollidingHasher {
    fn finish(&self) -> u64 {
        // Only the fact that something was written affects the result.
        self.written.min(1)
    }

    fn write(&mut self, bytes: &[u8]) {
        self.written = self.written.saturating_add(bytes.len() as u64);
    }
}

#[derive(Debug, Default, Clone)]
pub struct CollidingHasherBuilder;

impl BuildHasher for CollidingHasherBuilder {
    type Hasher = CollidingHasher;

    fn build_hasher(&self) -> Self::Hasher {
        CollidingHasher { written: 0 }
    }
}
