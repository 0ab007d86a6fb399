//! The session record written at login time.
//!
//! Two string values in tab-scoped session storage identify the signed-in
//! user to the rest of the application: the role under `userRole` and the
//! username under `username`. Other views read this record to decide what
//! to render. The browser clears the backing store when the tab session
//! ends; this module never expires the record itself.

use returnoscope_core::{StorageError, StoragePort};
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Session storage key holding the selected role.
pub const USER_ROLE_KEY: &str = "userRole";

/// Session storage key holding the username exactly as entered.
pub const USERNAME_KEY: &str = "username";

/// The signed-in identity as recorded in session storage.
///
/// The username is stored raw (untrimmed); any caller-supplied username is
/// trusted as a valid identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSession {
    role: Role,
    username: String,
}

impl ActiveSession {
    /// Creates a session record for the given role and username.
    #[must_use]
    pub fn new(role: Role, username: impl Into<String>) -> Self {
        Self {
            role,
            username: username.into(),
        }
    }

    /// Returns the role recorded at login.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the username exactly as it was entered.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns true if the session carries admin privileges.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Writes the record under the fixed keys.
    ///
    /// Writes are independent key/value sets, last write wins.
    pub fn persist(&self, store: &dyn StoragePort) -> Result<(), StorageError> {
        store.set(USER_ROLE_KEY, self.role.as_str())?;
        store.set(USERNAME_KEY, &self.username)?;
        Ok(())
    }

    /// Reads the record back, if a complete one is present.
    ///
    /// A missing key or an unrecognized role value reads as no session.
    #[must_use]
    pub fn load(store: &dyn StoragePort) -> Option<Self> {
        let role = Role::from_stored(&store.get(USER_ROLE_KEY)?)?;
        let username = store.get(USERNAME_KEY)?;
        Some(Self { role, username })
    }

    /// Removes the record from the store (log out).
    pub fn clear(store: &dyn StoragePort) {
        store.remove(USER_ROLE_KEY);
        store.remove(USERNAME_KEY);
    }
}
