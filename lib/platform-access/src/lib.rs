//! Platform access and login flow for ReturnoScope.
//!
//! This crate provides:
//! - Role-based landing destinations (`Role`)
//! - The session record other views read (`ActiveSession`)
//! - The login form state machine (`LoginForm`, `SubmitState`)
//!
//! # Access Model
//!
//! "Login" is a client-only state transition: any username is accepted as a
//! valid identity, gated by nothing but a fixed simulated delay. The chosen
//! role decides the landing view and is recorded alongside the username in
//! tab-scoped session storage, where the rest of the application reads it.
//!
//! # Example
//!
//! ```
//! use returnoscope_core::MemoryStore;
//! use returnoscope_platform_access::{LoginForm, Role};
//!
//! let session = MemoryStore::new();
//! let durable = MemoryStore::new();
//!
//! // Construct the form, pre-filled from a remembered username if present
//! let mut form = LoginForm::restore(&durable);
//! form.role = Some(Role::Trader);
//! form.username = "alice".to_string();
//!
//! // Validate, then run the deferred completion
//! let role = form.validate().expect("form is complete");
//! let outcome = form
//!     .complete(role, &session, &durable)
//!     .expect("in-memory store accepts writes");
//!
//! assert_eq!(outcome.destination(), "/");
//! assert_eq!(outcome.message(), "Welcome, alice! Logged in as Trader");
//! ```

pub mod error;
pub mod login;
pub mod role;
pub mod session;

// Re-export main types at crate root
pub use error::ValidationError;
pub use login::{LoginForm, LoginOutcome, REMEMBERED_USERNAME_KEY, SUBMIT_DELAY, SubmitState};
pub use role::Role;
pub use session::{ActiveSession, USER_ROLE_KEY, USERNAME_KEY};
