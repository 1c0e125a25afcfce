mod auth_routes;
mod backend;
mod config;
mod session_token;

use axum::Router;
use axum::http::HeaderMap;
use dioxus::fullstack::FullstackContext;
use tracing_subscriber::EnvFilter;
use types::{Result, SESSION_COOKIE_NAME, UserSession, err, unauthorized};

pub use crate::backend::{BACKEND_CLIENT, BackendClient};
pub use crate::config::{CONFIG, Config};
pub use crate::session_token::SessionSigner;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(error) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        tracing::debug!(%error, "tracing subscriber already installed");
    }
}

pub fn init() -> Router {
    tracing::info!(backend = %CONFIG.backend_url, "starting SuiteDesk");
    auth_routes::auth_router()
}

/// Extract and verify the user session from the request cookie.
pub async fn get_session_from_cookie() -> Result<UserSession> {
    let headers: HeaderMap = FullstackContext::extract()
        .await
        .map_err(|error| err!("failed to read request headers: {error}"))?;

    let token = session_cookie(&headers).ok_or_else(|| unauthorized!("not signed in"))?;

    SessionSigner::new(&CONFIG.session_secret).decode(token)
}

/// Require an authenticated session, returning it if valid.
pub async fn require_session() -> Result<UserSession> {
    get_session_from_cookie().await.inspect_err(|error| {
        tracing::debug!(%error, "rejecting request without a valid session");
    })
}

fn session_cookie(headers: &HeaderMap) -> Option<&str> {
    let cookie_header = headers
        .get(axum::http::header::COOKIE)
        .and_then(|v| v.to_str().ok())?;

    cookie_header.split(';').find_map(|cookie_str| {
        cookie_str
            .trim()
            .strip_prefix(SESSION_COOKIE_NAME)
            .and_then(|rest| rest.strip_prefix('='))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::COOKIE,
            HeaderValue::from_str(cookie).unwrap(),
        );
        headers
    }

    #[test]
    fn finds_session_among_other_cookies() {
        let headers = headers("theme=dark; suitedesk_session=abc.def; lang=en");
        assert_eq!(session_cookie(&headers), Some("abc.def"));
    }

    #[test]
    fn ignores_cookies_with_similar_names() {
        let headers = headers("suitedesk_session_old=zzz");
        assert_eq!(session_cookie(&headers), None);
    }

    #[test]
    fn tracing_init_tolerates_an_installed_subscriber() {
        init_tracing();
        init_tracing();
    }

    #[test]
    fn no_cookie_header() {
        assert_eq!(session_cookie(&HeaderMap::new()), None);
    }
}
