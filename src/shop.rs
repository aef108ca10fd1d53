//! The merchant shop record a session is bound to.

use crate::config::ShopDomain;
use serde::{Deserialize, Serialize};

/// A merchant shop as stored by the app.
///
/// Only the fields a session needs are modeled: the shop's domain and the
/// offline access token persisted for it. Loading and saving the record is
/// the caller's responsibility.
///
/// # Example
///
/// ```rust
/// use shopify_app::{Shop, ShopDomain};
///
/// let shop = Shop::with_token(ShopDomain::new("example").unwrap(), "abc");
/// assert!(shop.has_offline_access());
/// assert_eq!(shop.shopify_token.as_deref(), Some("abc"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    /// The shop's `*.myshopify.com` domain.
    pub shopify_domain: ShopDomain,

    /// The persisted offline access token, if the shop has installed the app.
    #[serde(default)]
    pub shopify_token: Option<String>,
}

impl Shop {
    /// Creates a shop record with no persisted token.
    #[must_use]
    pub const fn new(shopify_domain: ShopDomain) -> Self {
        Self {
            shopify_domain,
            shopify_token: None,
        }
    }

    /// Creates a shop record with a persisted offline token.
    #[must_use]
    pub fn with_token(shopify_domain: ShopDomain, token: impl Into<String>) -> Self {
        Self {
            shopify_domain,
            shopify_token: Some(token.into()),
        }
    }

    /// Returns `true` if a non-empty offline token is persisted.
    #[must_use]
    pub fn has_offline_access(&self) -> bool {
        self.shopify_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}
