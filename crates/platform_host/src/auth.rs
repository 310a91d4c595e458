//! Sign-in gate contract.
//!
//! The desktop only needs a signed-in user id to scope playlist storage; the gate that
//! produces it is a collaborator behind [`AuthGate`].

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Authenticated user returned by [`AuthGate::sign_in`].
pub struct UserSession {
    /// Stable user identifier used to scope stored data.
    pub user_id: String,
    /// Email address the user signed in with.
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Sign-in failures surfaced inline by the sign-in form.
pub enum AuthError {
    /// Email or password was left blank.
    #[error("please enter both email and password")]
    MissingCredentials,
    /// The credentials did not match a known account.
    #[error("invalid email or password")]
    InvalidCredentials,
    /// The backing service could not be reached.
    #[error("sign-in service unavailable: {0}")]
    Unavailable(String),
}

/// Object-safe boxed future used by [`AuthGate`] async methods.
pub type AuthFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Authentication collaborator.
pub trait AuthGate {
    /// Signs in with email/password.
    fn sign_in<'a>(
        &'a self,
        email: &'a str,
        password: &'a str,
    ) -> AuthFuture<'a, Result<UserSession, AuthError>>;

    /// Ends the current session.
    fn sign_out<'a>(&'a self) -> AuthFuture<'a, Result<(), AuthError>>;
}

/// Rejects blank credentials before they reach a gate.
///
/// # Errors
///
/// Returns [`AuthError::MissingCredentials`] when either field is blank.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), AuthError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    Ok(())
}

#[derive(Debug, Clone, Default)]
/// Account table held in memory; used for local development and tests.
pub struct MemoryAuthGate {
    accounts: Rc<RefCell<HashMap<String, String>>>,
    signed_in: Rc<RefCell<Option<UserSession>>>,
}

impl MemoryAuthGate {
    /// Registers (or replaces) an account.
    pub fn with_account(self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.accounts
            .borrow_mut()
            .insert(email.into().trim().to_ascii_lowercase(), password.into());
        self
    }

    /// Returns the currently signed-in user, if any.
    pub fn current_user(&self) -> Option<UserSession> {
        self.signed_in.borrow().clone()
    }
}

/// Derives the storage-scoping user id for an email address.
///
/// ASCII letters and digits pass through; every other character (including `_`) becomes
/// `_{hex code point}_`, so distinct addresses never share an id.
pub fn user_id_for_email(email: &str) -> String {
    let mut id = String::with_capacity(email.len());
    for c in email.chars() {
        if c.is_ascii_alphanumeric() {
            id.push(c);
        } else {
            id.push_str(&format!("_{:x}_", u32::from(c)));
        }
    }
    id
}

impl AuthGate for MemoryAuthGate {
    fn sign_in<'a>(
        &'a self,
        email: &'a str,
        password: &'a str,
    ) -> AuthFuture<'a, Result<UserSession, AuthError>> {
        Box::pin(async move {
            validate_credentials(email, password)?;
            let email = email.trim().to_ascii_lowercase();
            let matches = self
                .accounts
                .borrow()
                .get(&email)
                .is_some_and(|stored| stored == password);
            if !matches {
                return Err(AuthError::InvalidCredentials);
            }
            let session = UserSession {
                user_id: user_id_for_email(&email),
                email,
            };
            *self.signed_in.borrow_mut() = Some(session.clone());
            Ok(session)
        })
    }

    fn sign_out<'a>(&'a self) -> AuthFuture<'a, Result<(), AuthError>> {
        Box::pin(async move {
            self.signed_in.borrow_mut().take();
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::{assert_eq, assert_ne};

    use super::*;

    #[test]
    fn sign_in_matches_case_insensitive_email() {
        let gate = MemoryAuthGate::default().with_account("Ada@Example.com", "hunter2");
        let session = block_on(gate.sign_in(" ada@example.com", "hunter2")).expect("sign in");
        assert_eq!(session.email, "ada@example.com");
        assert_eq!(session.user_id, "ada_40_example_2e_com");
        assert_eq!(gate.current_user(), Some(session));
    }

    #[test]
    fn look_alike_emails_get_separate_storage_scopes() {
        let gate = MemoryAuthGate::default()
            .with_account("ada.l@x.com", "pw")
            .with_account("ada_l@x.com", "pw");
        let dotted = block_on(gate.sign_in("ada.l@x.com", "pw")).expect("sign in dotted");
        let underscored = block_on(gate.sign_in("ada_l@x.com", "pw")).expect("sign in underscored");
        assert_ne!(dotted.user_id, underscored.user_id);

        assert_ne!(user_id_for_email("a+b@x.com"), user_id_for_email("a-b@x.com"));
        assert_ne!(user_id_for_email("a_2e_b"), user_id_for_email("a.b"));
    }

    #[test]
    fn wrong_password_and_blank_fields_are_rejected() {
        let gate = MemoryAuthGate::default().with_account("ada@example.com", "hunter2");
        assert_eq!(
            block_on(gate.sign_in("ada@example.com", "nope")),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            block_on(gate.sign_in("", "hunter2")),
            Err(AuthError::MissingCredentials)
        );
        assert_eq!(gate.current_user(), None);
    }

    #[test]
    fn sign_out_clears_the_session() {
        let gate = MemoryAuthGate::default().with_account("ada@example.com", "pw");
        block_on(gate.sign_in("ada@example.com", "pw")).expect("sign in");
        block_on(gate.sign_out()).expect("sign out");
        assert_eq!(gate.current_user(), None);
    }
}
