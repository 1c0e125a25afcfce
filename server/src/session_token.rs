use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use jiff::Timestamp;
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use eyre::WrapErr;
use types::{Error, Result, UserSession, err, unauthorized};

type HmacSha256 = Hmac<Sha256>;

/// Signs and verifies the session cookie value: `base64(json).base64(mac)`.
pub struct SessionSigner<'a> {
    secret: &'a SecretString,
}

impl<'a> SessionSigner<'a> {
    pub fn new(secret: &'a SecretString) -> Self {
        Self { secret }
    }

    fn mac(&self) -> Result<HmacSha256> {
        HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .map_err(|_| err!("invalid session secret"))
    }

    pub fn encode(&self, session: &UserSession) -> Result<String> {
        let payload = BASE64_URL_SAFE_NO_PAD
            .encode(serde_json::to_vec(session).wrap_err("failed to serialize session")?);

        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        let signature = BASE64_URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        Ok(format!("{payload}.{signature}"))
    }

    pub fn decode(&self, token: &str) -> Result<UserSession> {
        self.decode_at(token, Timestamp::now())
    }

    pub fn decode_at(&self, token: &str, now: Timestamp) -> Result<UserSession> {
        let (payload, signature_b64) = token
            .split_once('.')
            .ok_or_else(|| unauthorized!("invalid session format"))?;

        let mut mac = self.mac()?;
        mac.update(payload.as_bytes());
        let signature = BASE64_URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| unauthorized!("invalid session signature"))?;
        mac.verify_slice(&signature)
            .map_err(|_| unauthorized!("invalid session signature"))?;

        let session =
            parse_payload(payload).map_err(|report| Error::from(report).into_unauthorized())?;

        if session.is_expired_at(now) {
            return Err(unauthorized!("session expired"));
        }

        Ok(session)
    }
}

fn parse_payload(payload: &str) -> eyre::Result<UserSession> {
    let json = BASE64_URL_SAFE_NO_PAD
        .decode(payload)
        .wrap_err("failed to decode session payload")?;
    serde_json::from_slice(&json).wrap_err("failed to parse session JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::ToSpan;
    use types::Principal;

    fn session(expires_at: Timestamp) -> UserSession {
        UserSession {
            principal: Principal {
                id: "9".into(),
                email: "lin@example.com".into(),
                display_name: "Lin".into(),
            },
            access_token: "backend-token".into(),
            expires_at,
        }
    }

    #[test]
    fn round_trip() {
        let secret = SecretString::from("s3cret");
        let signer = SessionSigner::new(&secret);
        let token = signer.encode(&session(Timestamp::now() + 1.hour())).unwrap();

        let decoded = signer.decode(&token).unwrap();
        assert_eq!(decoded.principal.id, "9");
        assert_eq!(decoded.access_token.expose_secret(), "backend-token");
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let secret = SecretString::from("s3cret");
        let signer = SessionSigner::new(&secret);
        let token = signer.encode(&session(Timestamp::now() + 1.hour())).unwrap();

        let (_, signature) = token.split_once('.').unwrap();
        let forged_payload = BASE64_URL_SAFE_NO_PAD.encode(b"{}");
        let error = signer
            .decode(&format!("{forged_payload}.{signature}"))
            .unwrap_err();
        assert!(error.is_unauthorized());
    }

    #[test]
    fn other_key_is_rejected() {
        let secret = SecretString::from("s3cret");
        let other = SecretString::from("different");
        let token = SessionSigner::new(&secret)
            .encode(&session(Timestamp::now() + 1.hour()))
            .unwrap();

        assert!(SessionSigner::new(&other).decode(&token).is_err());
    }

    #[test]
    fn expired_session_is_rejected() {
        let secret = SecretString::from("s3cret");
        let signer = SessionSigner::new(&secret);
        let now = Timestamp::now();
        let token = signer.encode(&session(now + 1.hour())).unwrap();

        assert!(signer.decode_at(&token, now).is_ok());
        let error = signer.decode_at(&token, now + 2.hours()).unwrap_err();
        assert_eq!(error.message, "session expired");
        assert!(error.is_unauthorized());
    }

    #[test]
    fn signed_payload_that_is_not_a_session_names_the_failure() {
        let secret = SecretString::from("s3cret");
        let signer = SessionSigner::new(&secret);

        let payload = BASE64_URL_SAFE_NO_PAD.encode(b"not json");
        let mut mac = signer.mac().unwrap();
        mac.update(payload.as_bytes());
        let signature = BASE64_URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        let error = signer.decode(&format!("{payload}.{signature}")).unwrap_err();
        assert_eq!(error.message, "failed to parse session JSON");
        assert!(error.chain.len() > 1);
        assert!(error.is_unauthorized());
    }

    #[test]
    fn garbage_is_rejected() {
        let secret = SecretString::from("s3cret");
        assert!(SessionSigner::new(&secret).decode("not-a-token").is_err());
    }
}
