//! The login state machine.
//!
//! Login is a client-only state transition: no credential is checked and no
//! server is consulted. Submitting the form validates two preconditions,
//! waits a fixed simulated-authentication delay, records the session,
//! optionally remembers the username in durable storage, and reports the
//! landing view to redirect to.
//!
//! This module holds the behavioral core as pure functions over value
//! types; the view layer owns the signals, the timer, and the navigation.

use std::time::Duration;

use returnoscope_core::{StorageError, StoragePort};
use rootcause::prelude::Report;
use tracing::debug;

use crate::error::ValidationError;
use crate::role::Role;
use crate::session::ActiveSession;

/// Durable storage key holding the username to pre-fill at the next login.
pub const REMEMBERED_USERNAME_KEY: &str = "rememberedUsername";

/// Fixed simulated-authentication delay between submit and completion.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(800);

/// The editable login form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Selected role, unset until the user picks one.
    pub role: Option<Role>,
    /// Username as typed, stored raw on completion.
    pub username: String,
    /// Whether to remember the username in durable storage.
    pub remember_me: bool,
}

/// Submit phase of the login view.
///
/// The submit control is disabled while `Submitting`; the view returns to
/// `Idle` once the deferred completion has run or was cancelled. Validation
/// failures never leave `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    /// Fields editable, submit enabled.
    #[default]
    Idle,
    /// Simulated authentication delay pending, submit disabled.
    Submitting,
}

impl SubmitState {
    /// Returns true while the simulated authentication delay is pending.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Where a completed login sends the user, and what it tells them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    destination: &'static str,
    message: String,
}

impl LoginOutcome {
    /// Path of the landing view to navigate to.
    #[must_use]
    pub fn destination(&self) -> &str {
        self.destination
    }

    /// Success notice to show the user.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl LoginForm {
    /// Restores a form pre-filled from the remembered username, if one is
    /// stored.
    ///
    /// This is a one-time read at view construction; the remember flag
    /// starts checked exactly when a remembered username was found.
    #[must_use]
    pub fn restore(durable: &dyn StoragePort) -> Self {
        match durable.get(REMEMBERED_USERNAME_KEY) {
            Some(username) => Self {
                role: None,
                username,
                remember_me: true,
            },
            None => Self::default(),
        }
    }

    /// Checks the submit preconditions in order, first failure wins.
    ///
    /// The username check trims leading/trailing whitespace for the
    /// emptiness test only; the value itself stays exactly as entered.
    /// On success, returns the role the completion should use.
    pub fn validate(&self) -> Result<Role, ValidationError> {
        let role = self.role.ok_or(ValidationError::MissingRole)?;
        if self.username.trim().is_empty() {
            return Err(ValidationError::MissingUsername);
        }
        Ok(role)
    }

    /// Completes a validated submit: records the session under the fixed
    /// keys, remembers the raw username when the flag is set, and reports
    /// where to go next.
    ///
    /// `role` is the value returned by [`validate`](Self::validate) when the
    /// submit was accepted. When `remember_me` is off no durable write
    /// happens and a previously remembered username is left in place. All
    /// writes are last-write-wins, so repeating a completion leaves the
    /// same state behind.
    pub fn complete(
        &self,
        role: Role,
        session: &dyn StoragePort,
        durable: &dyn StoragePort,
    ) -> Result<LoginOutcome, Report<StorageError>> {
        ActiveSession::new(role, self.username.clone()).persist(session)?;

        if self.remember_me {
            durable.set(REMEMBERED_USERNAME_KEY, &self.username)?;
        }

        debug!(role = %role, "login completed");

        Ok(LoginOutcome {
            destination: role.landing_path(),
            message: format!(
                "Welcome, {}! Logged in as {}",
                self.username,
                role.label()
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{USER_ROLE_KEY, USERNAME_KEY};
    use returnoscope_core::MemoryStore;

    fn filled_form(role: Role, username: &str, remember_me: bool) -> LoginForm {
        LoginForm {
            role: Some(role),
            username: username.to_string(),
            remember_me,
        }
    }

    #[test]
    fn submit_delay_is_800ms() {
        assert_eq!(SUBMIT_DELAY, Duration::from_millis(800));
    }

    #[test]
    fn submit_state_defaults_to_idle() {
        assert_eq!(SubmitState::default(), SubmitState::Idle);
        assert!(!SubmitState::Idle.is_submitting());
        assert!(SubmitState::Submitting.is_submitting());
    }

    #[test]
    fn missing_role_rejected_before_username() {
        // Role is checked first even when the username is also empty
        let form = LoginForm::default();
        assert_eq!(form.validate(), Err(ValidationError::MissingRole));

        let form = LoginForm {
            role: None,
            username: "alice".to_string(),
            remember_me: false,
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingRole));
    }

    #[test]
    fn whitespace_only_username_rejected() {
        let form = filled_form(Role::Trader, "   ", false);
        assert_eq!(form.validate(), Err(ValidationError::MissingUsername));

        let form = filled_form(Role::Trader, "", false);
        assert_eq!(form.validate(), Err(ValidationError::MissingUsername));
    }

    #[test]
    fn failed_validation_leaves_storage_untouched() {
        let session = MemoryStore::new();
        let durable = MemoryStore::new();

        let form = LoginForm::default();
        assert!(form.validate().is_err());

        assert!(session.is_empty());
        assert!(durable.is_empty());
    }

    #[test]
    fn username_with_surrounding_whitespace_passes_validation() {
        let form = filled_form(Role::Admin, "bob ", true);
        assert_eq!(form.validate(), Ok(Role::Admin));
    }

    #[test]
    fn trader_completion_without_remember() {
        let session = MemoryStore::new();
        let durable = MemoryStore::new();
        let form = filled_form(Role::Trader, "alice", false);

        let role = form.validate().expect("valid form");
        let outcome = form.complete(role, &session, &durable).expect("complete");

        assert_eq!(session.get(USER_ROLE_KEY).as_deref(), Some("trader"));
        assert_eq!(session.get(USERNAME_KEY).as_deref(), Some("alice"));
        assert!(durable.is_empty());
        assert_eq!(outcome.destination(), "/");
        assert_eq!(outcome.message(), "Welcome, alice! Logged in as Trader");
    }

    #[test]
    fn admin_completion_remembers_raw_username() {
        let session = MemoryStore::new();
        let durable = MemoryStore::new();
        let form = filled_form(Role::Admin, "bob ", true);

        let role = form.validate().expect("valid form");
        let outcome = form.complete(role, &session, &durable).expect("complete");

        // The raw, untrimmed value is what gets stored
        assert_eq!(session.get(USERNAME_KEY).as_deref(), Some("bob "));
        assert_eq!(
            durable.get(REMEMBERED_USERNAME_KEY).as_deref(),
            Some("bob ")
        );
        assert_eq!(outcome.destination(), "/admin-dashboard");
        assert_eq!(outcome.message(), "Welcome, bob ! Logged in as Admin");
    }

    #[test]
    fn remember_off_leaves_prior_durable_value() {
        let session = MemoryStore::new();
        let durable = MemoryStore::new();
        durable.set(REMEMBERED_USERNAME_KEY, "dave").expect("set");

        let form = filled_form(Role::Trader, "alice", false);
        let role = form.validate().expect("valid form");
        form.complete(role, &session, &durable).expect("complete");

        assert_eq!(
            durable.get(REMEMBERED_USERNAME_KEY).as_deref(),
            Some("dave")
        );
    }

    #[test]
    fn restore_prefills_remembered_username() {
        let durable = MemoryStore::new();
        durable.set(REMEMBERED_USERNAME_KEY, "carol").expect("set");

        let form = LoginForm::restore(&durable);
        assert_eq!(form.username, "carol");
        assert!(form.remember_me);
        assert_eq!(form.role, None);
    }

    #[test]
    fn restore_without_remembered_username_is_default() {
        let durable = MemoryStore::new();
        let form = LoginForm::restore(&durable);
        assert_eq!(form, LoginForm::default());
        assert!(!form.remember_me);
    }

    #[test]
    fn repeated_completion_is_idempotent() {
        let session = MemoryStore::new();
        let durable = MemoryStore::new();
        let form = filled_form(Role::Admin, "carol", true);
        let role = form.validate().expect("valid form");

        let first = form.complete(role, &session, &durable).expect("complete");
        let after_once = (
            session.get(USER_ROLE_KEY),
            session.get(USERNAME_KEY),
            durable.get(REMEMBERED_USERNAME_KEY),
            session.len(),
            durable.len(),
        );

        let second = form.complete(role, &session, &durable).expect("complete");
        let after_twice = (
            session.get(USER_ROLE_KEY),
            session.get(USERNAME_KEY),
            durable.get(REMEMBERED_USERNAME_KEY),
            session.len(),
            durable.len(),
        );

        assert_eq!(after_once, after_twice);
        assert_eq!(first, second);
    }
}
