//! Decoded access token grant responses.

use crate::auth::AssociatedUser;
use crate::error::SessionError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The body Shopify returns when an authorization code is exchanged for an
/// access token.
///
/// Offline grants carry only `access_token` and `scope`. Per-user grants add
/// `expires_in`, `associated_user_scope` and `associated_user`.
///
/// # Example
///
/// ```rust
/// use shopify_app::AccessPayload;
///
/// let payload = AccessPayload::from_json(
///     r#"{"access_token": "f85632530bf277ec9ac6f649fc327f17", "scope": "write_orders,read_customers"}"#,
/// ).unwrap();
///
/// assert!(!payload.is_per_user());
/// assert_eq!(payload.scopes().collect::<Vec<_>>(), ["write_orders", "read_customers"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPayload {
    /// The access token.
    pub access_token: String,

    /// Comma-separated scopes granted to the token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Seconds until a per-user token expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,

    /// Comma-separated scopes available to the associated user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_user_scope: Option<String>,

    /// The staff user the token belongs to, for per-user grants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_user: Option<AssociatedUser>,
}

impl AccessPayload {
    /// Creates an offline payload carrying only a token.
    #[must_use]
    pub fn offline(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            scope: None,
            expires_in: None,
            associated_user_scope: None,
            associated_user: None,
        }
    }

    /// Creates a per-user payload for `user`.
    #[must_use]
    pub fn per_user(access_token: impl Into<String>, user: AssociatedUser) -> Self {
        Self {
            associated_user: Some(user),
            ..Self::offline(access_token)
        }
    }

    /// Parses and validates a grant response body.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Json`] if the body is not a valid grant
    /// response, or [`SessionError::InvalidPayload`] if the token is empty.
    pub fn from_json(body: &str) -> Result<Self, SessionError> {
        let payload: Self = serde_json::from_str(body)?;
        payload.validate()?;
        Ok(payload)
    }

    /// Checks that the payload carries a usable token.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidPayload`] if `access_token` is blank.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.access_token.trim().is_empty() {
            return Err(SessionError::InvalidPayload {
                reason: "access_token is empty".to_string(),
            });
        }
        Ok(())
    }

    /// Returns `true` if the grant includes an associated user.
    #[must_use]
    pub const fn is_per_user(&self) -> bool {
        self.associated_user.is_some()
    }

    /// Iterates over the granted scopes.
    pub fn scopes(&self) -> impl Iterator<Item = &str> {
        split_scopes(self.scope.as_deref())
    }

    /// Iterates over the scopes available to the associated user.
    pub fn associated_user_scopes(&self) -> impl Iterator<Item = &str> {
        split_scopes(self.associated_user_scope.as_deref())
    }

    /// Returns when the token expires if it was issued at `issued_at`.
    ///
    /// Offline tokens do not expire and return `None`, as does an
    /// `expires_in` too large to represent.
    #[must_use]
    pub fn expires_at(&self, issued_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let secs = i64::try_from(self.expires_in?).ok()?;
        issued_at.checked_add_signed(Duration::try_seconds(secs)?)
    }
}

fn split_scopes(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const GRANT: &str = r#"{
        "access_token": "f85632530bf277ec9ac6f649fc327f17",
        "scope": "write_orders,read_customers",
        "expires_in": 86399,
        "associated_user_scope": "write_orders",
        "associated_user": {
            "id": 902541635,
            "first_name": "John",
            "last_name": "Smith",
            "email": "john@example.com",
            "email_verified": true,
            "account_owner": true,
            "locale": "en",
            "collaborator": false
        }
    }"#;

    #[test]
    fn test_from_json_parses_per_user_grant() {
        let payload = AccessPayload::from_json(GRANT).unwrap();

        assert!(payload.is_per_user());
        assert_eq!(payload.access_token, "f85632530bf277ec9ac6f649fc327f17");
        assert_eq!(payload.associated_user.as_ref().unwrap().id, 902_541_635);
        assert_eq!(
            payload.associated_user_scopes().collect::<Vec<_>>(),
            ["write_orders"]
        );
    }

    #[test]
    fn test_from_json_rejects_missing_token() {
        let result = AccessPayload::from_json(r#"{"scope": "read_products"}"#);
        assert!(matches!(result, Err(SessionError::Json(_))));
    }

    #[test]
    fn test_from_json_rejects_empty_token() {
        let result = AccessPayload::from_json(r#"{"access_token": "  "}"#);
        assert!(matches!(result, Err(SessionError::InvalidPayload { .. })));
    }

    #[test]
    fn test_null_associated_user_is_offline() {
        let payload =
            AccessPayload::from_json(r#"{"access_token": "abc", "associated_user": null}"#)
                .unwrap();
        assert!(!payload.is_per_user());
    }

    #[test]
    fn test_scopes_skip_blank_entries() {
        let mut payload = AccessPayload::offline("abc");
        assert_eq!(payload.scopes().count(), 0);

        payload.scope = Some("read_products, ,write_orders,".to_string());
        assert_eq!(
            payload.scopes().collect::<Vec<_>>(),
            ["read_products", "write_orders"]
        );
    }

    #[test]
    fn test_expires_at_adds_expires_in() {
        let payload = AccessPayload::from_json(GRANT).unwrap();
        let issued = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        let expires = payload.expires_at(issued).unwrap();
        assert_eq!(expires - issued, Duration::seconds(86399));

        assert!(AccessPayload::offline("abc").expires_at(issued).is_none());
    }

    #[test]
    fn test_expires_at_out_of_range_is_none() {
        let payload =
            AccessPayload::from_json(r#"{"access_token":"abc","expires_in":18446744073709551}"#)
                .unwrap();
        let issued = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert!(payload.expires_at(issued).is_none());

        let mut payload = AccessPayload::offline("abc");
        payload.expires_in = Some(u64::MAX);
        assert!(payload.expires_at(issued).is_none());
    }

    #[test]
    fn test_offline_payload_serializes_without_optional_fields() {
        let json = serde_json::to_string(&AccessPayload::offline("abc")).unwrap();
        assert_eq!(json, r#"{"access_token":"abc"}"#);
    }
}
