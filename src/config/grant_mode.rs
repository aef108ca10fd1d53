//! Access token grant modes.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// How an app obtains its access token for a shop.
///
/// - [`GrantMode::Offline`]: a store-wide token that is persisted on the shop
///   record and outlives any user session. This is the default.
/// - [`GrantMode::PerUser`]: a token scoped to the staff user who authorized
///   the app. It lives in the session only.
///
/// # Example
///
/// ```rust
/// use shopify_app::GrantMode;
///
/// let mode: GrantMode = "per-user".parse().unwrap();
/// assert_eq!(mode, GrantMode::PerUser);
/// assert_eq!(mode.to_string(), "per-user");
/// assert_eq!(GrantMode::default(), GrantMode::Offline);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GrantMode {
    /// Store-wide token persisted on the shop record.
    #[default]
    Offline,
    /// Token bound to an individual staff user.
    PerUser,
}

impl GrantMode {
    /// Returns the configuration string for this mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Offline => "offline",
            Self::PerUser => "per-user",
        }
    }

    /// Returns `true` for [`GrantMode::PerUser`].
    #[must_use]
    pub const fn is_per_user(&self) -> bool {
        matches!(self, Self::PerUser)
    }
}

impl fmt::Display for GrantMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GrantMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "offline" => Ok(Self::Offline),
            "per-user" => Ok(Self::PerUser),
            _ => Err(ConfigError::InvalidGrantMode {
                mode: s.to_string(),
            }),
        }
    }
}

impl Serialize for GrantMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GrantMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
