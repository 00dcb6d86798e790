//! Session capability gating journal generation.
//!
//! Authentication lives outside the core: callers inject a [`Session`] and the
//! core only asks whether it is active. No credential store is modelled here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ledger::LedgerError;

/// Credentials presented to a session.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    /// User name.
    pub username: String,
    /// Secret; never logged.
    pub secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("secret", &"***")
            .finish()
    }
}

/// The authenticated party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// User name.
    pub username: String,
    /// Name shown in logs.
    pub display_name: String,
}

/// Authentication failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown user or wrong secret.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// An externally provided session.
pub trait Session {
    /// Authenticates and, on success, activates the session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the credentials are rejected.
    fn authenticate(&mut self, credentials: &Credentials) -> Result<Identity, AuthError>;

    /// Returns true while the session may generate journals.
    fn is_active(&self) -> bool;
}

/// Precondition gate: fails unless the session is active.
///
/// # Errors
///
/// Returns `LedgerError::SessionInactive` for an inactive session.
pub fn require_active(session: &dyn Session) -> Result<(), LedgerError> {
    if session.is_active() {
        Ok(())
    } else {
        Err(LedgerError::SessionInactive)
    }
}
