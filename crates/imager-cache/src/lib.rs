//! Content-addressed identicon cache.
//!
//! Generated identicons are stored as immutable files named by
//! [`CacheKey`]. [`CacheStore::get_or_generate`] serves an existing entry or
//! renders, persists, and returns a new one.
//!
//! # Example
//!
//! ```ignore
//! use imager_cache::CacheStore;
//! use imager_render::MagickRenderer;
//!
//! let store = CacheStore::new(".imager/cache");
//! let renderer = MagickRenderer::new("magick");
//! let png = store.get_or_generate("koh110", 128, &renderer).await?;
//! ```

mod error;
mod key;
mod store;

pub use error::GenerateError;
pub use key::CacheKey;
pub use store::CacheStore;
