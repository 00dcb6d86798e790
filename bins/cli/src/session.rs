//! Trusted local-operator session.

use salesbook_core::session::{AuthError, Credentials, Identity, Session};

/// Session for the operator configured on this machine.
///
/// The operator is trusted: only the user name is checked.
#[derive(Debug)]
pub struct LocalSession {
    operator: String,
    active: bool,
}

impl LocalSession {
    /// Creates an inactive session for `operator`.
    pub fn new(operator: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
            active: false,
        }
    }

    /// Credentials of the configured operator.
    pub fn operator_credentials(&self) -> Credentials {
        Credentials {
            username: self.operator.clone(),
            secret: String::new(),
        }
    }
}

impl Session for LocalSession {
    fn authenticate(&mut self, credentials: &Credentials) -> Result<Identity, AuthError> {
        if credentials.username != self.operator {
            self.active = false;
            return Err(AuthError::InvalidCredentials);
        }

        self.active = true;
        Ok(Identity {
            username: self.operator.clone(),
            display_name: self.operator.clone(),
        })
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
