//! The session adapter binding a shop to its access tokens.

use crate::auth::{AccessPayload, AssociatedUser};
use crate::config::{AppConfig, GrantMode, ShopDomain};
use crate::error::SessionError;
use crate::session::{SessionKey, SessionStore};
use crate::shop::Shop;
use serde_json::Value;

/// Maps a [`Shop`] to the authenticated state held in a visitor's session.
///
/// A `ShopSession` is built per request. It borrows the app configuration
/// and the session store, and owns the shop record it is bound to. All
/// session state lives in the store under the [`SessionKey`] keys, so a new
/// `ShopSession` over the same store sees what an earlier one wrote.
///
/// # Grant Modes
///
/// - **Offline**: the token is written to the session and synchronized onto
///   the shop record as its persisted `shopify_token`. Any user left by an
///   earlier per-user grant is removed.
/// - **Per-user**: the associated user and its token are written to the
///   session, and the session is switched to expire when the browser closes.
///
/// # Example
///
/// ```rust
/// use shopify_app::{AccessPayload, AppConfig, GrantMode, Shop, ShopDomain, ShopSession};
/// use shopify_app::session::MemorySessionStore;
///
/// let config = AppConfig::default();
/// let mut store = MemorySessionStore::new();
/// let shop = Shop::new(ShopDomain::new("example").unwrap());
///
/// let mut session = ShopSession::new(&config, &mut store, shop);
/// session.set_access(&AccessPayload::offline("abc")).unwrap();
/// session.set_domain(&ShopDomain::new("example").unwrap());
///
/// assert!(session.is_type(GrantMode::Offline));
/// assert_eq!(session.get_token(false).as_deref(), Some("abc"));
/// assert!(session.is_valid());
///
/// // The caller persists the updated shop record.
/// let shop = session.into_shop();
/// assert_eq!(shop.shopify_token.as_deref(), Some("abc"));
/// ```
#[derive(Debug)]
pub struct ShopSession<'a, S: SessionStore> {
    config: &'a AppConfig,
    store: &'a mut S,
    shop: Shop,
    grant_mode: Option<GrantMode>,
}

impl<'a, S: SessionStore> ShopSession<'a, S> {
    /// Binds a session adapter to `shop`. Performs no reads or writes.
    #[must_use]
    pub fn new(config: &'a AppConfig, store: &'a mut S, shop: Shop) -> Self {
        Self {
            config,
            store,
            shop,
            grant_mode: None,
        }
    }

    /// Stores the access granted by `payload` according to the configured
    /// grant mode, and returns the mode that was applied.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidPayload`] if the token is empty, or if
    /// the app is in per-user mode and the payload has no associated user.
    /// The session is left untouched on error.
    pub fn set_access(&mut self, payload: &AccessPayload) -> Result<GrantMode, SessionError> {
        payload.validate()?;

        let mode = self.config.api_grant_mode();
        match mode {
            GrantMode::PerUser => {
                let user = payload.associated_user.as_ref().ok_or_else(|| {
                    SessionError::InvalidPayload {
                        reason: "per-user grant is missing associated_user".to_string(),
                    }
                })?;
                let user = serde_json::to_value(user)?;

                // Per-user tokens must not outlive the browser session.
                self.store.set_expire_on_close(true);
                self.store.set(SessionKey::User.as_str(), user);
            }
            GrantMode::Offline => {
                self.store.forget(SessionKey::User.as_str());
                self.shop.shopify_token = Some(payload.access_token.clone());
            }
        }

        self.store.set(
            SessionKey::Token.as_str(),
            Value::String(payload.access_token.clone()),
        );
        self.grant_mode = Some(mode);

        tracing::debug!(
            "Set {} access for shop {}",
            mode,
            self.shop.shopify_domain
        );

        Ok(mode)
    }

    /// Returns the associated user stored in the session, if any.
    #[must_use]
    pub fn get_user(&self) -> Option<AssociatedUser> {
        let value = self.store.get(SessionKey::User.as_str())?;
        if value.is_null() {
            return None;
        }

        match serde_json::from_value(value) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(
                    "Ignoring undecodable session user for shop {}: {}",
                    self.shop.shopify_domain,
                    e
                );
                None
            }
        }
    }

    /// Returns `true` if a user is stored in the session.
    #[must_use]
    pub fn has_user(&self) -> bool {
        self.get_user().is_some()
    }

    /// Returns the access token to use for API calls.
    ///
    /// With `strict`, the token is picked by the current grant type: the
    /// session token for per-user access, the shop's persisted token for
    /// offline access. Without it, the session token is used whenever a user
    /// is present and the shop's token otherwise. Both forms therefore yield
    /// the per-user token once per-user access has been set.
    #[must_use]
    pub fn get_token(&self, strict: bool) -> Option<String> {
        let per_user = if strict {
            self.get_type().is_per_user()
        } else {
            self.has_user()
        };

        if per_user {
            self.session_token()
        } else {
            self.shop_token()
        }
    }

    /// Returns the grant mode applied by the last [`set_access`](Self::set_access)
    /// on this adapter, or the configured grant mode if access was set on an
    /// earlier request.
    #[must_use]
    pub fn get_type(&self) -> GrantMode {
        self.grant_mode
            .unwrap_or_else(|| self.config.api_grant_mode())
    }

    /// Returns `true` if the current grant mode is `mode`.
    #[must_use]
    pub fn is_type(&self, mode: GrantMode) -> bool {
        self.get_type() == mode
    }

    /// Stores the shop domain in the session.
    pub fn set_domain(&mut self, domain: &ShopDomain) {
        self.store.set(
            SessionKey::Domain.as_str(),
            Value::String(domain.to_string()),
        );
        tracing::debug!("Set session domain to {}", domain);
    }

    /// Returns the shop domain stored in the session, if any.
    #[must_use]
    pub fn get_domain(&self) -> Option<ShopDomain> {
        let value = self.store.get(SessionKey::Domain.as_str())?;
        ShopDomain::new(value.as_str()?).ok()
    }

    /// Returns `true` if the session holds the bound shop's domain.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.get_domain()
            .is_some_and(|domain| domain == self.shop.shopify_domain)
    }

    /// Removes the user, token and domain from the session.
    ///
    /// Calling this on an empty session is a no-op.
    pub fn forget(&mut self) {
        for key in SessionKey::ALL {
            self.store.forget(key.as_str());
        }
        tracing::debug!("Forgot session for shop {}", self.shop.shopify_domain);
    }

    /// Returns the bound shop record.
    #[must_use]
    pub const fn shop(&self) -> &Shop {
        &self.shop
    }

    /// Consumes the adapter, returning the shop record so it can be persisted.
    #[must_use]
    pub fn into_shop(self) -> Shop {
        self.shop
    }

    fn session_token(&self) -> Option<String> {
        match self.store.get(SessionKey::Token.as_str())? {
            Value::String(token) if !token.is_empty() => Some(token),
            _ => None,
        }
    }

    fn shop_token(&self) -> Option<String> {
        self.shop
            .shopify_token
            .clone()
            .filter(|token| !token.is_empty())
    }
}
