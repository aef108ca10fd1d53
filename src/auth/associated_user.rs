//! The staff user attached to a per-user access grant.

use serde::{Deserialize, Serialize};

/// A Shopify staff user associated with a per-user access token.
///
/// Shopify includes this object in the token grant response only when the app
/// requests per-user (online) access. It is stored in the session as JSON
/// under [`SessionKey::User`](crate::session::SessionKey::User).
///
/// # Example
///
/// ```rust
/// use shopify_app::AssociatedUser;
///
/// let user: AssociatedUser = serde_json::from_str(r#"{
///     "id": 902541635,
///     "first_name": "John",
///     "last_name": "Smith",
///     "email": "john@example.com",
///     "email_verified": true,
///     "account_owner": true,
///     "locale": "en",
///     "collaborator": false
/// }"#).unwrap();
///
/// assert_eq!(user.full_name(), "John Smith");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociatedUser {
    /// The Shopify user ID.
    pub id: u64,

    /// The user's first name.
    pub first_name: String,

    /// The user's last name.
    pub last_name: String,

    /// The user's email address.
    pub email: String,

    /// Whether the user's email has been verified.
    #[serde(default)]
    pub email_verified: bool,

    /// Whether the user owns the store account.
    #[serde(default)]
    pub account_owner: bool,

    /// The user's locale preference (e.g., "en", "fr").
    #[serde(default)]
    pub locale: String,

    /// Whether the user is a collaborator rather than staff.
    #[serde(default)]
    pub collaborator: bool,
}

impl AssociatedUser {
    /// Returns the first and last name joined by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

// Verify AssociatedUser is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AssociatedUser>();
};
