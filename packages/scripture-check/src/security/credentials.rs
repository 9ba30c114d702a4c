//! Provider API keys.
//!
//! Keys live in a `secrecy` box and print as `[REDACTED]`, so a provider's
//! `Debug` output or a logged error never carries the key itself.

use secrecy::{ExposeSecret, SecretBox};
use std::fmt;

use crate::error::ProviderError;

/// A provider API key.
pub struct ApiKey(SecretBox<str>);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(SecretBox::new(key.into().into_boxed_str()))
    }

    /// Read a key from an environment variable; unset or blank is an error.
    pub fn from_env(var: &str) -> Result<Self, ProviderError> {
        match std::env::var(var) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key.trim())),
            _ => Err(ProviderError::Config(format!("{} not set", var))),
        }
    }

    /// The raw key, for an `Authorization` or API-key header.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for ApiKey {
    fn clone(&self) -> Self {
        Self::new(self.expose())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

impl From<&str> for ApiKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ApiKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_not_in_debug() {
        let key = ApiKey::new("sk-super-secret-key");
        let debug = format!("{:?}", key);
        assert!(!debug.contains("sk-super"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_clone_keeps_key() {
        let key = ApiKey::new("sk-abc");
        assert_eq!(key.clone().expose(), "sk-abc");
    }

    #[test]
    fn test_from_env_trims_key() {
        std::env::set_var("SCRIPTURE_CHECK_TEST_PADDED_KEY", "  sk-padded \n");
        let key = ApiKey::from_env("SCRIPTURE_CHECK_TEST_PADDED_KEY").unwrap();
        assert_eq!(key.expose(), "sk-padded");
    }

    #[test]
    fn test_missing_env_key_is_config_error() {
        let err = ApiKey::from_env("SCRIPTURE_CHECK_TEST_UNSET_KEY").unwrap_err();
        assert!(matches!(err, ProviderError::Config(_)));
    }
}
