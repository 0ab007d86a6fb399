//! Role types determining post-login access and destination.
//!
//! ReturnoScope has two fixed identity classes. The role chosen on the
//! login screen decides which landing view the user is redirected to and
//! is recorded in the session record for other views to read.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity class selected at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Market access and analysis.
    Trader,
    /// Platform management.
    Admin,
}

impl Role {
    /// Stored string form; this is the value written under the session
    /// `userRole` key.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trader => "trader",
            Self::Admin => "admin",
        }
    }

    /// Parses the stored string form back into a role.
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "trader" => Some(Self::Trader),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Human-readable label used in user-facing notices.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Trader => "Trader",
            Self::Admin => "Admin",
        }
    }

    /// Path of the landing view this role is redirected to after login.
    #[must_use]
    pub fn landing_path(&self) -> &'static str {
        match self {
            Self::Trader => "/",
            Self::Admin => "/admin-dashboard",
        }
    }

    /// Returns true if this role has admin privileges.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_is_admin() {
        assert!(!Role::Trader.is_admin());
        assert!(Role::Admin.is_admin());
    }

    #[test]
    fn stored_form_is_lowercase() {
        assert_eq!(Role::Trader.as_str(), "trader");
        assert_eq!(Role::Admin.as_str(), "admin");
    }

    #[test]
    fn from_stored_roundtrip() {
        assert_eq!(Role::from_stored("trader"), Some(Role::Trader));
        assert_eq!(Role::from_stored("admin"), Some(Role::Admin));
        assert_eq!(Role::from_stored("viewer"), None);
        assert_eq!(Role::from_stored("Trader"), None);
    }

    #[test]
    fn labels_are_capitalized() {
        assert_eq!(Role::Trader.label(), "Trader");
        assert_eq!(Role::Admin.label(), "Admin");
    }

    #[test]
    fn landing_paths() {
        assert_eq!(Role::Trader.landing_path(), "/");
        assert_eq!(Role::Admin.landing_path(), "/admin-dashboard");
    }

    #[test]
    fn role_serialization_format() {
        let json = serde_json::to_string(&Role::Admin).expect("serialize");
        assert_eq!(json, "\"admin\"");

        let json = serde_json::to_string(&Role::Trader).expect("serialize");
        assert_eq!(json, "\"trader\"");
    }

    #[test]
    fn role_serialization_roundtrip() {
        let parsed: Role = serde_json::from_str("\"trader\"").expect("deserialize");
        assert_eq!(parsed, Role::Trader);
    }
}
