//! File-based identicon store.
//!
//! [`CacheStore`] keeps one file per [`CacheKey`] in a flat directory:
//!
//! ```text
//! {dir}/
//! +-- bb1aa264215e4b675f4bdce3a91dfcb4.png
//! +-- c67c455f36b193377bff81fa40a29d8d.png
//! +-- ...
//! ```
//!
//! Existence of the named file is the only index. Entries are written once
//! and never modified: a new entry is written to a uniquely named sibling
//! temp file and renamed into place, so readers only ever see complete files.
//! No locks are taken. Concurrent first requests for the same key each render
//! and rename independently, and the last rename wins with an equally valid
//! image.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use imager_identicon::{DrawingDescriptor, IdenticonRequest};
use imager_render::{RenderError, RenderLimits, Renderer};
use rand::RngExt;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::GenerateError;
use crate::key::CacheKey;

/// Content-addressed identicon cache rooted at a directory.
#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
    limits: RenderLimits,
}

impl CacheStore {
    /// Create a store over `dir`.
    ///
    /// The directory is created on the first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            limits: RenderLimits::default(),
        }
    }

    /// Set the time and size budget applied around every render.
    #[must_use]
    pub fn with_limits(mut self, limits: RenderLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Cache directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Final path of the entry for `key`.
    #[must_use]
    pub fn entry_path(&self, key: &CacheKey) -> PathBuf {
        self.dir.join(key.file_name())
    }

    /// Return the cached image for `(input, size)`, rendering it on a miss.
    ///
    /// On a hit the renderer is not called. On a miss the identicon is
    /// rendered with `renderer`, persisted, and the rendered bytes are
    /// returned directly. A failed persist is logged and does not fail the
    /// call.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidInput`] for an empty `input` or zero
    /// `size` (the renderer is never reached), and [`GenerateError::Render`]
    /// if rendering fails, times out, or exceeds the output ceiling. Nothing
    /// is written on error.
    pub async fn get_or_generate<R>(
        &self,
        input: &str,
        size: u32,
        renderer: &R,
    ) -> Result<Vec<u8>, GenerateError>
    where
        R: Renderer + ?Sized,
    {
        let request = IdenticonRequest::new(input, size)?;
        let key = CacheKey::for_request(&request);
        let path = self.entry_path(&key);

        if let Some(bytes) = read_entry(&path).await {
            tracing::debug!(key = %key, bytes = bytes.len(), "Identicon cache hit");
            return Ok(bytes);
        }

        let descriptor = request.descriptor()?;
        let bytes = self.render(renderer, &descriptor).await?;

        match self.persist(&key, &path, &bytes).await {
            Ok(()) => {
                tracing::info!(key = %key, size, bytes = bytes.len(), "Identicon generated");
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to persist identicon");
            }
        }

        Ok(bytes)
    }

    /// Render within the configured limits.
    async fn render<R>(
        &self,
        renderer: &R,
        descriptor: &DrawingDescriptor,
    ) -> Result<Vec<u8>, RenderError>
    where
        R: Renderer + ?Sized,
    {
        let RenderLimits {
            timeout,
            max_output_bytes,
        } = self.limits;

        let bytes = tokio::time::timeout(timeout, renderer.render(descriptor))
            .await
            .map_err(|_| RenderError::Timeout(timeout))??;

        if bytes.len() > max_output_bytes {
            return Err(RenderError::OutputTooLarge {
                limit: max_output_bytes,
            });
        }
        Ok(bytes)
    }

    /// Write `bytes` to a sibling temp file and rename it over `path`.
    async fn persist(&self, key: &CacheKey, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir).await?;

        let tmp = self.dir.join(temp_file_name(key));
        let result = write_then_rename(&tmp, path, bytes).await;
        if result.is_err() {
            // The temp name is unique to this call, so nobody else owns it.
            let _ = fs::remove_file(&tmp).await;
        }
        result
    }
}

/// Read a cache entry, treating every failure as a miss.
///
/// Errors other than not-found are logged so that an unreadable cache shows
/// up in the logs instead of silently re-rendering forever.
async fn read_entry(path: &Path) -> Option<Vec<u8>> {
    match fs::metadata(path).await {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => {
            tracing::warn!(path = %path.display(), "Cache entry is not a regular file");
            return None;
        }
        Err(e) if e.kind() == ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to stat cache entry");
            return None;
        }
    }

    match fs::read(path).await {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read cache entry");
            None
        }
    }
}

async fn write_then_rename(tmp: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(tmp).await?;
    file.write_all(bytes).await?;
    file.sync_all().await?;
    drop(file);
    fs::rename(tmp, path).await
}

/// Unique temp name next to the entry: key, time and randomness.
fn temp_file_name(key: &CacheKey) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let nonce = rand::rng().random::<u64>();
    format!("{}_{nanos:x}{nonce:016x}.tmp", key.file_name())
}
