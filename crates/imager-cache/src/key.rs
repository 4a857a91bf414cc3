//! Cache key computation.
//!
//! Provides [`CacheKey`], the content-addressed file name of a cache entry.

use std::fmt;

use imager_identicon::IdenticonRequest;
use md5::{Digest, Md5};

/// Extension of every cache entry.
const SUFFIX: &str = ".png";

/// File name of the cache entry for one `(input, size)` pair.
///
/// # Key Format
///
/// Hex MD5 of `"{input}\n{size}"` followed by `.png`, e.g.
/// `bb1aa264215e4b675f4bdce3a91dfcb4.png`. The input is hashed as given,
/// without normalization.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    file_name: String,
}

impl CacheKey {
    /// Compute the key for `input` at `size` pixels.
    #[must_use]
    pub fn new(input: &str, size: u32) -> Self {
        let hash = Md5::digest(format!("{input}\n{size}").as_bytes());
        Self {
            file_name: format!("{}{SUFFIX}", hex::encode(hash)),
        }
    }

    /// Compute the key for a validated request.
    #[must_use]
    pub fn for_request(request: &IdenticonRequest<'_>) -> Self {
        Self::new(request.input(), request.size())
    }

    /// Entry file name, including the suffix.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The 32-character hex hash without the suffix.
    #[must_use]
    pub fn hash(&self) -> &str {
        self.file_name
            .strip_suffix(SUFFIX)
            .unwrap_or(&self.file_name)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cache_key_known_values() {
        // md5("koh110\n128"), md5("koh110\n64")
        assert_eq!(
            CacheKey::new("koh110", 128).file_name(),
            "bb1aa264215e4b675f4bdce3a91dfcb4.png"
        );
        assert_eq!(
            CacheKey::new("koh110", 64).file_name(),
            "1e74bb6965077051ea66a0ccba8e6ae3.png"
        );
    }

    #[test]
    fn test_cache_key_is_stable() {
        assert_eq!(CacheKey::new("alice", 128), CacheKey::new("alice", 128));
    }

    #[test]
    fn test_cache_key_depends_on_size() {
        assert_ne!(CacheKey::new("alice", 64), CacheKey::new("alice", 128));
        assert_eq!(
            CacheKey::new("alice", 64).file_name(),
            "e378b44d08f3f0adb88743b639344e00.png"
        );
        assert_eq!(
            CacheKey::new("alice", 128).file_name(),
            "c67c455f36b193377bff81fa40a29d8d.png"
        );
    }

    #[test]
    fn test_cache_key_depends_on_input() {
        assert_ne!(CacheKey::new("alice", 128), CacheKey::new("bob", 128));
    }

    #[test]
    fn test_cache_key_format() {
        let key = CacheKey::new("anything", 32);

        assert_eq!(key.hash().len(), 32);
        assert!(key.hash().chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(key.to_string(), format!("{}.png", key.hash()));
    }

    #[test]
    fn test_cache_key_for_request() {
        let request = IdenticonRequest::new("koh110", 128).unwrap();
        assert_eq!(CacheKey::for_request(&request), CacheKey::new("koh110", 128));
    }
}
