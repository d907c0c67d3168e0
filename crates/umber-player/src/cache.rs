//! File-backed caching of generated noise buffers.
//!
//! The cache is an optional optimization with zero generator coupling: it
//! stores opaque byte blobs (encoded WAV files) keyed by the lowercase
//! noise-type label, and deleting it never changes generator output. Entries
//! are written to an XDG-compatible cache directory together with a small
//! JSON manifest recording the blob hash.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Errors that can occur while reading or writing the cache.
#[derive(Debug, Error)]
pub enum CacheError {
    /// No usable cache directory on this platform.
    #[error("no cache directory available")]
    NoCacheDir,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest (de)serialization error.
    #[error("manifest error: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// Byte-blob cache keyed by lowercase noise-type label.
pub trait BufferCache {
    /// Stores a blob under `key`, replacing any previous entry.
    fn store(&self, key: &str, blob: &[u8]) -> CacheResult<()>;

    /// Loads the blob stored under `key`, or `None` on a miss.
    fn load(&self, key: &str) -> CacheResult<Option<Vec<u8>>>;
}

/// Manifest stored alongside each cached blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheManifest {
    /// The cache key (lowercase noise-type label).
    pub key: String,
    /// BLAKE3 hash of the blob.
    pub blob_hash: String,
    /// Timestamp when this entry was written.
    pub created_at: String,
}

/// Filesystem cache rooted in an XDG-compatible directory.
pub struct FsBufferCache {
    root: PathBuf,
}

impl FsBufferCache {
    /// Creates a cache in the default per-user cache directory.
    pub fn new() -> CacheResult<Self> {
        let root = Self::default_cache_dir().ok_or(CacheError::NoCacheDir)?;
        Ok(Self { root })
    }

    /// Creates a cache rooted at an explicit directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The default XDG-compatible cache directory.
    pub fn default_cache_dir() -> Option<PathBuf> {
        dirs::cache_dir().map(|d| d.join("umber").join("noise"))
    }

    /// Path of the blob stored under `key`.
    pub fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.wav"))
    }

    fn manifest_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    fn read_manifest(&self, path: &Path) -> CacheResult<CacheManifest> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
}

impl BufferCache for FsBufferCache {
    fn store(&self, key: &str, blob: &[u8]) -> CacheResult<()> {
        fs::create_dir_all(&self.root)?;

        let manifest = CacheManifest {
            key: key.to_string(),
            blob_hash: blake3::hash(blob).to_hex().to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        fs::write(self.blob_path(key), blob)?;
        fs::write(
            self.manifest_path(key),
            serde_json::to_string_pretty(&manifest)?,
        )?;
        Ok(())
    }

    fn load(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
        let blob_path = self.blob_path(key);
        if !blob_path.exists() {
            return Ok(None);
        }

        let blob = fs::read(&blob_path)?;

        // A missing or stale manifest makes the entry a miss, not an error.
        let manifest_path = self.manifest_path(key);
        if !manifest_path.exists() {
            return Ok(None);
        }
        let manifest = self.read_manifest(&manifest_path)?;
        if manifest.blob_hash != blake3::hash(&blob).to_hex().to_string() {
            return Ok(None);
        }

        Ok(Some(blob))
    }
}

/// In-memory cache for tests and short-lived sessions.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache lock poisoned").len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BufferCache for MemoryCache {
    fn store(&self, key: &str, blob: &[u8]) -> CacheResult<()> {
        self.entries
            .lock()
            .expect("cache lock poisoned")
            .insert(key.to_string(), blob.to_vec());
        Ok(())
    }

    fn load(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
        Ok(self
            .entries
            .lock()
            .expect("cache lock poisoned")
            .get(key)
            .cloned())
    }
}
