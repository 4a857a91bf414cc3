//! Identicon generation with a content-addressed file cache.
//!
//! [`Imager`] ties the pieces together: the identicon geometry from
//! `imager-identicon`, the ImageMagick renderer from `imager-render`, and the
//! file store from `imager-cache`, all configured from `imager.toml`.
//!
//! ```ignore
//! use imager::Imager;
//! use imager_config::{Config, ConfigOverrides};
//!
//! let config = Config::load(None, Some(&ConfigOverrides::from_env()))?;
//! let imager = Imager::from_config(&config);
//! let png = imager.generate("koh110", 64).await?;
//! ```

use std::path::Path;

pub use imager_cache::{CacheKey, CacheStore, GenerateError};
use imager_config::Config;
pub use imager_identicon::IdenticonError;
pub use imager_render::{MagickRenderer, RenderError, RenderLimits, Renderer};

/// Identicon service over a cache directory.
#[derive(Debug, Clone)]
pub struct Imager<R = MagickRenderer> {
    store: CacheStore,
    renderer: R,
    default_size: u32,
}

impl Imager<MagickRenderer> {
    /// Build the store and ImageMagick renderer described by `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let limits = RenderLimits {
            timeout: config.render.timeout(),
            max_output_bytes: config.render.max_output_bytes,
        };
        tracing::debug!(
            cache_dir = %config.cache_dir.display(),
            magick = %config.render.magick_path,
            "Configured identicon cache"
        );

        Self {
            store: CacheStore::new(&config.cache_dir).with_limits(limits),
            renderer: MagickRenderer::new(&config.render.magick_path).with_limits(limits),
            default_size: config.identicon.default_size,
        }
    }
}

impl<R: Renderer> Imager<R> {
    /// Use an explicit store and renderer.
    #[must_use]
    pub fn with_renderer(store: CacheStore, renderer: R, default_size: u32) -> Self {
        Self {
            store,
            renderer,
            default_size,
        }
    }

    /// PNG identicon for `identifier` at `size` x `size` pixels.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidInput`] for an empty identifier or zero
    /// size, and [`GenerateError::Render`] when rendering fails.
    pub async fn generate(&self, identifier: &str, size: u32) -> Result<Vec<u8>, GenerateError> {
        self.store
            .get_or_generate(identifier, size, &self.renderer)
            .await
    }

    /// PNG identicon for `identifier` at the configured default size.
    ///
    /// # Errors
    ///
    /// Same as [`Imager::generate`].
    pub async fn generate_default(&self, identifier: &str) -> Result<Vec<u8>, GenerateError> {
        self.generate(identifier, self.default_size).await
    }

    /// Cache directory.
    #[must_use]
    pub fn cache_dir(&self) -> &Path {
        self.store.dir()
    }

    /// Size used by [`Imager::generate_default`].
    #[must_use]
    pub fn default_size(&self) -> u32 {
        self.default_size
    }

    /// The configured renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
