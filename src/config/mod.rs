//! Configuration types for shop session management.
//!
//! # Overview
//!
//! - [`AppConfig`]: app-level settings consulted by [`ShopSession`](crate::ShopSession)
//! - [`AppConfigBuilder`]: a builder for constructing [`AppConfig`] instances
//! - [`GrantMode`]: offline or per-user access tokens
//! - [`ShopDomain`]: a validated Shopify shop domain
//!
//! # Example
//!
//! ```rust
//! use shopify_app::{AppConfig, GrantMode};
//!
//! let config = AppConfig::builder()
//!     .api_grant_mode(GrantMode::PerUser)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_grant_mode(), GrantMode::PerUser);
//! ```

mod grant_mode;
mod newtypes;

pub use grant_mode::GrantMode;
pub use newtypes::ShopDomain;

use crate::error::ConfigError;

/// App-level configuration for shop sessions.
///
/// Configuration is instance-based and passed to each
/// [`ShopSession`](crate::ShopSession) by reference; there is no global
/// configuration store.
///
/// # Thread Safety
///
/// `AppConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    api_grant_mode: GrantMode,
}

impl AppConfig {
    /// Creates a new builder for constructing an `AppConfig`.
    #[must_use]
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::new()
    }

    /// Returns the grant mode used when access is set on a session.
    #[must_use]
    pub const fn api_grant_mode(&self) -> GrantMode {
        self.api_grant_mode
    }
}

// Verify AppConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AppConfig>();
};

/// Builder for constructing [`AppConfig`] instances.
///
/// # Defaults
///
/// - `api_grant_mode`: [`GrantMode::Offline`]
///
/// # Example
///
/// ```rust
/// use shopify_app::{AppConfig, GrantMode};
///
/// // Grant mode read from an environment variable or settings file
/// let config = AppConfig::builder()
///     .api_grant_mode_str("per-user")
///     .build()
///     .unwrap();
/// assert!(config.api_grant_mode().is_per_user());
/// ```
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    api_grant_mode: Option<GrantMode>,
    raw_grant_mode: Option<String>,
}

impl AppConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the grant mode.
    #[must_use]
    pub const fn api_grant_mode(mut self, mode: GrantMode) -> Self {
        self.api_grant_mode = Some(mode);
        self
    }

    /// Sets the grant mode from its string form (`"offline"` or `"per-user"`).
    ///
    /// The value is validated by [`build`](Self::build). A later call to
    /// either grant mode setter replaces this one.
    #[must_use]
    pub fn api_grant_mode_str(mut self, mode: impl Into<String>) -> Self {
        self.api_grant_mode = None;
        self.raw_grant_mode = Some(mode.into());
        self
    }

    /// Builds the [`AppConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidGrantMode`] if a grant mode string was
    /// supplied and is not recognized.
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let api_grant_mode = match (self.api_grant_mode, self.raw_grant_mode) {
            (Some(mode), _) => mode,
            (None, Some(raw)) => raw.parse()?,
            (None, None) => GrantMode::default(),
        };

        Ok(AppConfig { api_grant_mode })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_offline() {
        let config = AppConfig::builder().build().unwrap();
        assert_eq!(config.api_grant_mode(), GrantMode::Offline);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_builder_sets_grant_mode() {
        let config = AppConfig::builder()
            .api_grant_mode(GrantMode::PerUser)
            .build()
            .unwrap();
        assert_eq!(config.api_grant_mode(), GrantMode::PerUser);
    }

    #[test]
    fn test_builder_parses_grant_mode_string() {
        let config = AppConfig::builder()
            .api_grant_mode_str("per-user")
            .build()
            .unwrap();
        assert_eq!(config.api_grant_mode(), GrantMode::PerUser);
    }

    #[test]
    fn test_builder_rejects_unknown_grant_mode_string() {
        let result = AppConfig::builder().api_grant_mode_str("online").build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidGrantMode { mode }) if mode == "online"
        ));
    }

    #[test]
    fn test_last_grant_mode_setter_wins() {
        let config = AppConfig::builder()
            .api_grant_mode_str("bogus")
            .api_grant_mode(GrantMode::Offline)
            .build()
            .unwrap();
        assert_eq!(config.api_grant_mode(), GrantMode::Offline);

        let config = AppConfig::builder()
            .api_grant_mode(GrantMode::Offline)
            .api_grant_mode_str("per-user")
            .build()
            .unwrap();
        assert_eq!(config.api_grant_mode(), GrantMode::PerUser);
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AppConfig>();
    }
}
