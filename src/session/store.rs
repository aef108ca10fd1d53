//! Session key-value storage.

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// The fixed keys a [`ShopSession`](crate::ShopSession) writes to its store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionKey {
    /// The associated user of a per-user grant.
    User,
    /// The access token from the most recent grant.
    Token,
    /// The domain of the shop the session belongs to.
    Domain,
}

impl SessionKey {
    /// Every key, in the order they are cleared.
    pub const ALL: [Self; 3] = [Self::User, Self::Token, Self::Domain];

    /// Returns the string key used in the backing store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "shopify_user",
            Self::Token => "shopify_token",
            Self::Domain => "shopify_domain",
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A per-visitor session backend.
///
/// Implementations wrap whatever session mechanism the web framework
/// provides. Values are JSON so structured data such as an
/// [`AssociatedUser`](crate::AssociatedUser) survives the round trip.
///
/// The expire-on-close flag is part of the session rather than global
/// configuration: setting it affects only the visitor this session belongs to.
pub trait SessionStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<Value>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: Value);

    /// Removes `key`. Removing a missing key is a no-op.
    fn forget(&mut self, key: &str);

    /// Returns `true` if the session ends when the browser is closed.
    fn expire_on_close(&self) -> bool;

    /// Sets whether the session ends when the browser is closed.
    fn set_expire_on_close(&mut self, expire: bool);
}

/// An in-memory [`SessionStore`].
///
/// Useful in tests and for callers that keep session state themselves.
///
/// # Example
///
/// ```rust
/// use shopify_app::session::{MemorySessionStore, SessionStore};
/// use serde_json::json;
///
/// let mut store = MemorySessionStore::new();
/// store.set("greeting", json!("hello"));
/// assert_eq!(store.get("greeting"), Some(json!("hello")));
///
/// store.forget("greeting");
/// assert!(store.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    values: HashMap<String, Value>,
    expire_on_close: bool,
}

impl MemorySessionStore {
    /// Creates an empty store that persists beyond browser close.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no keys are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    fn forget(&mut self, key: &str) {
        self.values.remove(key);
    }

    fn expire_on_close(&self) -> bool {
        self.expire_on_close
    }

    fn set_expire_on_close(&mut self, expire: bool) {
        self.expire_on_close = expire;
    }
}

// Verify MemorySessionStore is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MemorySessionStore>();
};
