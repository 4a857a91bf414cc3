//! `${VAR}` and `${VAR:-default}` expansion for string settings.

use crate::ConfigError;

/// Expand environment variable references in `value`.
///
/// `field` names the setting in the error when a variable without a default
/// is unset. Values without `${` are returned unchanged.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var).map(Some).map_err(|_| UnsetVar(var.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Name of a variable that had no value.
struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_expand_set_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("IMAGER_TEST_EXPAND_SET", "/opt/im/magick");
        }
        let result = expand_env("${IMAGER_TEST_EXPAND_SET}", "render.magick_path").unwrap();
        assert_eq!(result, "/opt/im/magick");
        unsafe {
            std::env::remove_var("IMAGER_TEST_EXPAND_SET");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("IMAGER_TEST_EXPAND_UNSET");
        }
        let result = expand_env("${IMAGER_TEST_EXPAND_UNSET:-magick}", "render.magick_path");
        assert_eq!(result.unwrap(), "magick");
    }

    #[test]
    fn test_expand_inside_path() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("IMAGER_TEST_EXPAND_ROOT", "/var/lib");
        }
        let result = expand_env("${IMAGER_TEST_EXPAND_ROOT}/imager/cache", "cache.dir").unwrap();
        assert_eq!(result, "/var/lib/imager/cache");
        unsafe {
            std::env::remove_var("IMAGER_TEST_EXPAND_ROOT");
        }
    }

    #[test]
    fn test_expand_missing_var_names_field() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("IMAGER_TEST_EXPAND_MISSING");
        }
        let err = expand_env("${IMAGER_TEST_EXPAND_MISSING}", "cache.dir").unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert_eq!(
            err.to_string(),
            "Environment variable error in cache.dir: ${IMAGER_TEST_EXPAND_MISSING} not set"
        );
    }

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(expand_env("magick", "render.magick_path").unwrap(), "magick");
    }
}
