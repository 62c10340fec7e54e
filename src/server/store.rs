use super::shard::Shard;
use crate::error::{KvError, Result};

/// A fixed-size, ordered collection of shards, indexed `0..num_shards`.
#[derive(Debug)]
pub struct ShardServer {
    shards: Vec<Shard>,
}

impl ShardServer {
    pub fn new(num_shards: usize) -> Self {
        Self {
            shards: (0..num_shards).map(|_| Shard::new()).collect(),
        }
    }

    pub fn num_shards(&self) -> usize {
        self.shards.len()
    }

    /// Indices are signed on the wire; anything outside `0..num_shards` is `ShardNotFound`.
    pub fn shard(&self, index: i64) -> Result<&Shard> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.shards.get(i))
            .ok_or(KvError::ShardNotFound {
                index,
                count: self.shards.len(),
            })
    }

    pub fn set(
        &self,
        shard_index: i64,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<()> {
        self.shard(shard_index)?.set(key.into(), value.into());
        Ok(())
    }

    /// `Ok(None)` for an absent key; only a bad shard index is an error.
    pub fn get(&self, shard_index: i64, key: &str) -> Result<Option<String>> {
        Ok(self.shard(shard_index)?.get(key))
    }

    /// Deleting an absent key is a no-op.
    pub fn delete(&self, shard_index: i64, key: &str) -> Result<()> {
        self.shard(shard_index)?.delete(key);
        Ok(())
    }

    pub fn exists(&self, shard_index: i64, key: &str) -> Result<bool> {
        Ok(self.shard(shard_index)?.exists(key))
    }

    /// Sum of entry counts, taking each shard's read lock in turn.
    ///
    /// Not a snapshot: writes to shards already counted (or not yet counted) during the walk
    /// are reflected inconsistently.
    pub fn length(&self) -> usize {
        self.shards.iter().map(Shard::len).sum()
    }
}
