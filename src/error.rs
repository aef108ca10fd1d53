//! Error types for shop session management.
//!
//! # Error Handling
//!
//! Configuration constructors return `Result<T, ConfigError>` so invalid
//! values are rejected up front. Session operations only fail when an access
//! payload cannot be used; missing session state is reported as `None`.
//!
//! # Example
//!
//! ```rust
//! use shopify_app::{ConfigError, ShopDomain};
//!
//! let result = ShopDomain::new("");
//! assert!(matches!(result, Err(ConfigError::InvalidShopDomain { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building configuration values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected format: 'shop-name' or 'shop-name.myshopify.com'.")]
    InvalidShopDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// Grant mode is not one of the known values.
    #[error("Invalid API grant mode '{mode}'. Expected 'offline' or 'per-user'.")]
    InvalidGrantMode {
        /// The invalid mode string that was provided.
        mode: String,
    },
}

/// Errors that can occur while applying an access payload to a session.
///
/// # Example
///
/// ```rust
/// use shopify_app::SessionError;
///
/// let error = SessionError::InvalidPayload {
///     reason: "access_token is empty".to_string(),
/// };
/// assert!(error.to_string().contains("access_token"));
/// ```
#[derive(Debug, Error)]
pub enum SessionError {
    /// The access payload is missing data required by the grant mode.
    #[error("Invalid access payload: {reason}")]
    InvalidPayload {
        /// What was wrong with the payload.
        reason: String,
    },

    /// The access payload could not be decoded.
    #[error("Failed to decode access payload: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_shop_domain_error_message() {
        let error = ConfigError::InvalidShopDomain {
            domain: "bad domain!".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("bad domain!"));
        assert!(message.contains("Expected format"));
    }

    #[test]
    fn test_invalid_grant_mode_error_message() {
        let error = ConfigError::InvalidGrantMode {
            mode: "online".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("online"));
        assert!(message.contains("per-user"));
    }

    #[test]
    fn test_json_error_converts_into_session_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: SessionError = json_err.into();
        assert!(matches!(error, SessionError::Json(_)));
        assert!(error.to_string().starts_with("Failed to decode access payload"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let config_error = ConfigError::InvalidGrantMode {
            mode: String::new(),
        };
        let _: &dyn std::error::Error = &config_error;

        let session_error = SessionError::InvalidPayload {
            reason: String::new(),
        };
        let _: &dyn std::error::Error = &session_error;
    }
}
