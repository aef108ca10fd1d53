//! Access grant types consumed by shop sessions.
//!
//! - [`AccessPayload`]: the decoded token grant response from Shopify's OAuth flow
//! - [`AssociatedUser`]: the staff user attached to a per-user grant
//!
//! The OAuth handshake that produces these payloads is not part of this
//! crate; callers decode the grant response and hand it to
//! [`ShopSession::set_access`](crate::ShopSession::set_access).

mod access_payload;
mod associated_user;

pub use access_payload::AccessPayload;
pub use associated_user::AssociatedUser;
