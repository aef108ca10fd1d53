//! Shop session management.
//!
//! - [`ShopSession`]: binds a shop to the access state held in a visitor's session
//! - [`SessionStore`]: the key-value session backend a `ShopSession` writes to
//! - [`MemorySessionStore`]: an in-memory `SessionStore`
//! - [`SessionKey`]: the fixed keys used in the store

mod shop_session;
mod store;

pub use shop_session::ShopSession;
pub use store::{MemorySessionStore, SessionKey, SessionStore};
