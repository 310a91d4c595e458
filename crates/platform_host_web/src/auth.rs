//! Local sign-in profile gate.
//!
//! There is no account server in the browser build: signing in selects a local profile keyed by
//! email, which scopes the playlist library. The active session is remembered in
//! `localStorage` so a reload lands back on the desktop.

use platform_host::{
    user_id_for_email, validate_credentials, AuthError, AuthFuture, AuthGate, UserSession,
};

use crate::WebPrefsStore;

/// Preference key holding the signed-in profile.
pub const SESSION_PREF_KEY: &str = "auth.session";

#[derive(Debug, Clone, Copy, Default)]
/// [`AuthGate`] that accepts any non-blank credentials as a local profile.
pub struct WebProfileAuthGate {
    prefs: WebPrefsStore,
}

impl WebProfileAuthGate {
    /// Returns the profile remembered from an earlier sign-in, if any.
    pub fn restore_session(&self) -> Option<UserSession> {
        self.prefs.load_typed(SESSION_PREF_KEY)
    }
}

impl AuthGate for WebProfileAuthGate {
    fn sign_in<'a>(
        &'a self,
        email: &'a str,
        password: &'a str,
    ) -> AuthFuture<'a, Result<UserSession, AuthError>> {
        let prefs = self.prefs;
        Box::pin(async move {
            validate_credentials(email, password)?;
            let email = email.trim().to_ascii_lowercase();
            let session = UserSession {
                user_id: user_id_for_email(&email),
                email,
            };
            prefs
                .save_typed(SESSION_PREF_KEY, &session)
                .map_err(AuthError::Unavailable)?;
            Ok(session)
        })
    }

    fn sign_out<'a>(&'a self) -> AuthFuture<'a, Result<(), AuthError>> {
        let prefs = self.prefs;
        Box::pin(async move {
            prefs
                .delete_json(SESSION_PREF_KEY)
                .map_err(AuthError::Unavailable)
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn any_filled_credentials_select_a_profile() {
        let gate = WebProfileAuthGate::default();
        let session = block_on(gate.sign_in("  Grace@Example.COM ", "x")).expect("sign in");
        assert_eq!(
            session,
            UserSession {
                user_id: "grace_40_example_2e_com".to_string(),
                email: "grace@example.com".to_string(),
            }
        );
        block_on(gate.sign_out()).expect("sign out");
    }

    #[test]
    fn blank_credentials_never_reach_storage() {
        let gate = WebProfileAuthGate::default();
        assert_eq!(
            block_on(gate.sign_in("grace@example.com", "")),
            Err(AuthError::MissingCredentials)
        );
        assert_eq!(gate.restore_session(), None);
    }
}
