//! # Shopify App Session
//!
//! Session management for Shopify apps: binds a merchant shop to the access
//! token stored in a visitor's session, for both offline and per-user grants.
//!
//! ## Overview
//!
//! This crate provides:
//! - Instance-based configuration via [`AppConfig`] and [`AppConfigBuilder`]
//! - The [`GrantMode`] choice between offline and per-user access tokens
//! - Decoded token grant responses via [`AccessPayload`] and [`AssociatedUser`]
//! - The [`Shop`] record a session is bound to
//! - The [`ShopSession`] adapter over any [`SessionStore`](session::SessionStore)
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_app::{AccessPayload, AppConfig, GrantMode, Shop, ShopDomain, ShopSession};
//! use shopify_app::session::{MemorySessionStore, SessionStore};
//!
//! let config = AppConfig::builder()
//!     .api_grant_mode(GrantMode::PerUser)
//!     .build()
//!     .unwrap();
//!
//! let payload = AccessPayload::from_json(r#"{
//!     "access_token": "f85632530bf277ec9ac6f649fc327f17",
//!     "scope": "write_orders",
//!     "expires_in": 86399,
//!     "associated_user": {
//!         "id": 902541635,
//!         "first_name": "John",
//!         "last_name": "Smith",
//!         "email": "john@example.com"
//!     }
//! }"#).unwrap();
//!
//! let domain = ShopDomain::new("example").unwrap();
//! let mut store = MemorySessionStore::new();
//!
//! let mut session = ShopSession::new(&config, &mut store, Shop::new(domain.clone()));
//! session.set_access(&payload).unwrap();
//! session.set_domain(&domain);
//!
//! assert!(session.has_user());
//! assert!(session.is_valid());
//! assert_eq!(
//!     session.get_token(true).as_deref(),
//!     Some("f85632530bf277ec9ac6f649fc327f17")
//! );
//!
//! // Per-user sessions end with the browser.
//! assert!(store.expire_on_close());
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration and the session store are passed explicitly
//! - **Fail-fast validation**: newtypes and payloads validate on construction
//! - **Absence is not an error**: missing session state reads as `None`

pub mod auth;
pub mod config;
pub mod error;
pub mod session;
pub mod shop;

pub use auth::{AccessPayload, AssociatedUser};
pub use config::{AppConfig, AppConfigBuilder, GrantMode, ShopDomain};
pub use error::{ConfigError, SessionError};
pub use session::ShopSession;
pub use shop::Shop;
