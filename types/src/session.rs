use jiff::Timestamp;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

pub const SESSION_COOKIE_NAME: &str = "suitedesk_session";

/// The authenticated user, as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: String,
    pub email: String,
    pub display_name: String,
}

impl Principal {
    /// Upper-cased first letter of the display name, for avatars.
    pub fn initial(&self) -> String {
        self.display_name
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSession {
    pub principal: Principal,
    #[serde(with = "secret_string")]
    pub access_token: SecretString,
    pub expires_at: Timestamp,
}

impl UserSession {
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Timestamp::now())
    }

    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        now >= self.expires_at
    }
}

/// The part of a [`UserSession`] the browser may see. The backend token
/// stays on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSession {
    pub principal: Principal,
    pub expires_at: Timestamp,
}

impl From<&UserSession> for ClientSession {
    fn from(session: &UserSession) -> Self {
        Self {
            principal: session.principal.clone(),
            expires_at: session.expires_at,
        }
    }
}

mod secret_string {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use secrecy::ExposeSecret;
        serializer.serialize_str(secret.expose_secret())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::ToSpan;
    use secrecy::ExposeSecret;

    fn session(expires_at: Timestamp) -> UserSession {
        UserSession {
            principal: Principal {
                id: "u-1".into(),
                email: "ada@example.com".into(),
                display_name: "ada Lovelace".into(),
            },
            access_token: "tok".into(),
            expires_at,
        }
    }

    #[test]
    fn client_view_leaves_token_behind() {
        let client = ClientSession::from(&session(Timestamp::UNIX_EPOCH));
        let json = serde_json::to_string(&client).unwrap();

        assert!(!json.contains("tok"));
        assert!(!json.contains("access_token"));
        assert_eq!(client.principal.id, "u-1");
    }

    #[test]
    fn cookie_payload_keeps_token() {
        let json = serde_json::to_string(&session(Timestamp::UNIX_EPOCH)).unwrap();
        let back: UserSession = serde_json::from_str(&json).unwrap();

        assert_eq!(back.access_token.expose_secret(), "tok");
        assert_eq!(back.principal.initial(), "A");
    }

    #[test]
    fn expiry_is_inclusive() {
        let now = Timestamp::now();
        assert!(session(now).is_expired_at(now));
        assert!(!session(now + 1.hour()).is_expired_at(now));
    }
}
