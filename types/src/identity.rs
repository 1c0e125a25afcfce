use secrecy::{ExposeSecret, SecretString};

use crate::session::{ClientSession, Principal};

/// What the client currently knows about who is signed in.
///
/// Owned by the identity store; everything else only reads it. Sessions
/// resolved from the server carry no token: the credential lives in an
/// `HttpOnly` cookie.
#[derive(Debug, Clone)]
pub struct IdentitySnapshot {
    pub user: Option<Principal>,
    pub token: Option<SecretString>,
    pub is_loading: bool,
}

impl IdentitySnapshot {
    /// Initial state, before the session has been looked up.
    pub fn resolving() -> Self {
        Self {
            user: None,
            token: None,
            is_loading: true,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            is_loading: false,
            ..Self::resolving()
        }
    }

    pub fn from_session(session: Option<ClientSession>) -> Self {
        match session {
            Some(session) => Self {
                user: Some(session.principal),
                token: None,
                is_loading: false,
            },
            None => Self::signed_out(),
        }
    }

    /// True if either a principal or a non-empty token is present.
    ///
    /// An empty token counts as absent.
    pub fn has_identity(&self) -> bool {
        self.user.is_some()
            || self
                .token
                .as_ref()
                .is_some_and(|t| !t.expose_secret().is_empty())
    }
}

impl Default for IdentitySnapshot {
    fn default() -> Self {
        Self::resolving()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::Timestamp;

    fn principal() -> Principal {
        Principal {
            id: "7".into(),
            email: "grace@example.com".into(),
            display_name: "Grace".into(),
        }
    }

    #[test]
    fn default_is_resolving() {
        let snapshot = IdentitySnapshot::default();
        assert!(snapshot.is_loading);
        assert!(!snapshot.has_identity());
    }

    #[test]
    fn session_becomes_resolved_identity() {
        let snapshot = IdentitySnapshot::from_session(Some(ClientSession {
            principal: principal(),
            expires_at: Timestamp::UNIX_EPOCH,
        }));

        assert!(!snapshot.is_loading);
        assert!(snapshot.has_identity());
        assert!(snapshot.token.is_none());
        assert_eq!(snapshot.user, Some(principal()));
    }

    #[test]
    fn missing_session_is_signed_out() {
        let snapshot = IdentitySnapshot::from_session(None);
        assert!(!snapshot.is_loading);
        assert!(!snapshot.has_identity());
    }

    #[test]
    fn token_alone_counts_unless_empty() {
        let mut snapshot = IdentitySnapshot::signed_out();
        snapshot.token = Some("t".into());
        assert!(snapshot.has_identity());

        snapshot.token = Some("".into());
        assert!(!snapshot.has_identity());
    }
}
