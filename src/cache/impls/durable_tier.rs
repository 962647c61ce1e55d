use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use log::{debug, warn};
use sha1::{Digest, Sha1};
use crate::cache::enums::cache_tier_kind::CacheTierKind;
use crate::cache::enums::compression_algorithm::CompressionAlgorithm;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_entry::CacheEntry;
use crate::cache::structs::durable_tier::DurableTier;
use crate::cache::traits::cache_tier::CacheTier;

const ENTRY_EXTENSION: &str = "cache";

impl DurableTier {
    pub async fn new<P: AsRef<Path>>(root: P, compression: CompressionAlgorithm) -> Result<DurableTier, CacheError> {
        let root = root.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&root).await?;
        debug!("[DURABLE] Segment at {} ({compression})", root.display());
        Ok(DurableTier { root, compression })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn key_hash(key: &str) -> String {
        let mut hasher = Sha1::new();
        hasher.update(key.as_bytes());
        hex::encode(hasher.finalize().as_slice())
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        let hash = Self::key_hash(key);
        self.root.join(&hash[0..2]).join(format!("{hash}.{ENTRY_EXTENSION}"))
    }

    async fn remove_file(path: &Path) -> Result<bool, CacheError> {
        match tokio::fs::remove_file(path).await {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(CacheError::Io(e)),
        }
    }

    /// Every entry file currently in the segment.
    async fn entry_files(&self) -> Result<Vec<PathBuf>, CacheError> {
        let mut files = Vec::new();
        let mut shards = match tokio::fs::read_dir(&self.root).await {
            Ok(shards) => shards,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(files),
            Err(e) => return Err(CacheError::Io(e)),
        };
        while let Some(shard) = shards.next_entry().await? {
            if !shard.file_type().await?.is_dir() {
                continue;
            }
            let mut entries = tokio::fs::read_dir(shard.path()).await?;
            while let Some(entry) = entries.next_entry().await? {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == ENTRY_EXTENSION) {
                    files.push(path);
                }
            }
        }
        Ok(files)
    }
}

#[async_trait]
impl CacheTier for DurableTier {
    fn kind(&self) -> CacheTierKind {
        CacheTierKind::durable
    }

    async fn try_get(&self, key: &str) -> Result<Option<CacheEntry>, CacheError> {
        let data = match tokio::fs::read(self.path_for(key)).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CacheError::Io(e)),
        };
        let entry = CacheEntry::decode(&data)?;
        if entry.key != key {
            warn!("[DURABLE] Hash collision between {key} and {}", entry.key);
            return Ok(None);
        }
        Ok(Some(entry))
    }

    async fn put(&self, entry: &CacheEntry) -> Result<(), CacheError> {
        let path = self.path_for(&entry.key);
        let Some(shard) = path.parent() else {
            return Err(CacheError::InvalidKey(entry.key.clone()));
        };
        tokio::fs::create_dir_all(shard).await?;

        let frame = entry.encode(self.compression)?;
        let hash = Self::key_hash(&entry.key);
        let temp = shard.join(format!(".{hash}.{}.tmp", uuid::Uuid::new_v4()));
        if let Err(e) = tokio::fs::write(&temp, &frame).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(CacheError::Io(e));
        }
        if let Err(e) = tokio::fs::rename(&temp, &path).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(CacheError::Io(e));
        }
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool, CacheError> {
        Self::remove_file(&self.path_for(key)).await
    }

    async fn clear(&self) -> Result<(), CacheError> {
        for path in self.entry_files().await? {
            Self::remove_file(&path).await?;
        }
        Ok(())
    }

    async fn purge_expired(&self, now: i64) -> Result<usize, CacheError> {
        let mut purged = 0;
        for path in self.entry_files().await? {
            let data = match tokio::fs::read(&path).await {
                Ok(data) => data,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(CacheError::Io(e)),
            };
            let stale = match CacheEntry::decode(&data) {
                Ok(entry) => entry.is_expired(now),
                Err(e) => {
                    warn!("[DURABLE] Dropping unreadable {}: {e}", path.display());
                    true
                }
            };
            if stale && Self::remove_file(&path).await? {
                purged += 1;
            }
        }
        Ok(purged)
    }

    async fn ping(&self) -> Result<(), CacheError> {
        tokio::fs::metadata(&self.root).await?;
        Ok(())
    }
}
