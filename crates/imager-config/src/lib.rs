//! Configuration management for imager.
//!
//! Parses `imager.toml` with serde and discovers it in the current directory
//! or any parent. Explicit settings can be applied on top via
//! [`ConfigOverrides`].
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `cache.dir`
//! - `render.magick_path`

mod expand;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "imager.toml";

/// Cache directory relative to the project root when none is configured.
const DEFAULT_CACHE_DIR: &str = ".imager/cache";

/// Largest accepted `identicon.default_size`.
const MAX_DEFAULT_SIZE: u32 = 4096;

/// Settings that take precedence over the configuration file.
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    /// Override cache directory.
    pub cache_dir: Option<PathBuf>,
    /// Override ImageMagick executable.
    pub magick_path: Option<String>,
}

impl ConfigOverrides {
    /// Read overrides from `IDENTICON_CACHE_DIR` and `IMAGE_MAGICK_PATH`.
    ///
    /// Unset or empty variables are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            cache_dir: var("IDENTICON_CACHE_DIR").map(PathBuf::from),
            magick_path: var("IMAGE_MAGICK_PATH"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cache section as written in the file.
    cache: CacheConfigRaw,
    /// Rendering configuration.
    pub render: RenderConfig,
    /// Identicon defaults.
    pub identicon: IdenticonConfig,

    /// Resolved absolute cache directory (set after loading).
    #[serde(skip)]
    pub cache_dir: PathBuf,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw cache configuration (path as string).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct CacheConfigRaw {
    dir: Option<String>,
}

/// ImageMagick rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// ImageMagick executable name or path.
    pub magick_path: String,
    /// Per-render timeout in milliseconds.
    pub timeout_ms: u64,
    /// Largest accepted PNG, in bytes.
    pub max_output_bytes: usize,
}

impl RenderConfig {
    /// Per-render timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            magick_path: "magick".to_owned(),
            timeout_ms: 10_000,
            max_output_bytes: 6000 * 1024,
        }
    }
}

/// Identicon defaults.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct IdenticonConfig {
    /// Output edge length used when a request gives none.
    pub default_size: u32,
}

impl Default for IdenticonConfig {
    fn default() -> Self {
        Self { default_size: 128 }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`cache.dir`").
        field: String,
        /// Error message (e.g., "${`CACHE_ROOT`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration, then apply `overrides`.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `imager.toml` in the current directory and its parents, falling
    /// back to defaults rooted at the current directory.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `config_path` doesn't exist, or if reading,
    /// parsing, expansion or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        overrides: Option<&ConfigOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(overrides) = overrides {
            config.apply_overrides(overrides);
            config.validate()?;
        }

        Ok(config)
    }

    fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(cache_dir) = &overrides.cache_dir {
            self.cache_dir.clone_from(cache_dir);
        }
        if let Some(magick_path) = &overrides.magick_path {
            self.render.magick_path.clone_from(magick_path);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with the cache rooted at `base`.
    fn default_with_base(base: &Path) -> Self {
        Self {
            cache: CacheConfigRaw::default(),
            render: RenderConfig::default(),
            identicon: IdenticonConfig::default(),
            cache_dir: base.join(DEFAULT_CACHE_DIR),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.render.magick_path, "render.magick_path")?;
        if self.render.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "render.timeout_ms must be greater than 0".to_owned(),
            ));
        }
        if self.render.max_output_bytes == 0 {
            return Err(ConfigError::Validation(
                "render.max_output_bytes must be greater than 0".to_owned(),
            ));
        }

        let size = self.identicon.default_size;
        if !(1..=MAX_DEFAULT_SIZE).contains(&size) {
            return Err(ConfigError::Validation(format!(
                "identicon.default_size must be between 1 and {MAX_DEFAULT_SIZE}, got {size}"
            )));
        }

        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref dir) = self.cache.dir {
            self.cache.dir = Some(expand::expand_env(dir, "cache.dir")?);
        }
        self.render.magick_path =
            expand::expand_env(&self.render.magick_path, "render.magick_path")?;
        Ok(())
    }

    /// Resolve the cache directory against the config file's directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.cache_dir = config_dir.join(self.cache.dir.as_deref().unwrap_or(DEFAULT_CACHE_DIR));
    }
}
