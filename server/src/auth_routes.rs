use axum::{
    Form, Router,
    http::header::SET_COOKIE,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use cookie::{Cookie, SameSite};
use jiff::{Timestamp, ToSpan};
use secrecy::SecretString;
use serde::Deserialize;
use types::{Result, SESSION_COOKIE_NAME, UserSession, gate::LOGIN_ROUTE};

use crate::{BACKEND_CLIENT, CONFIG, SessionSigner};

pub fn auth_router() -> Router {
    Router::new()
        .route("/auth/session", post(create_session))
        .route("/auth/logout", get(logout))
}

#[derive(Deserialize)]
struct LoginForm {
    email: String,
    password: SecretString,
}

async fn create_session(Form(form): Form<LoginForm>) -> Response {
    match create_session_inner(form).await {
        Ok(response) => response,
        Err(error) => {
            tracing::info!(%error, "sign-in failed");
            Redirect::to(&login_error_url(&error.message)).into_response()
        }
    }
}

async fn create_session_inner(form: LoginForm) -> Result<Response> {
    let login = BACKEND_CLIENT.login(&form.email, &form.password).await?;

    let session = UserSession {
        principal: login.user,
        access_token: login.token,
        expires_at: Timestamp::now() + i64::from(CONFIG.session_ttl_hours).hours(),
    };
    tracing::info!(user = %session.principal.id, "signed in");

    let token = SessionSigner::new(&CONFIG.session_secret).encode(&session)?;
    let cookie = Cookie::build((SESSION_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(CONFIG.secure_cookies)
        .build();

    Ok(with_cookie(Redirect::to("/"), cookie))
}

async fn logout() -> Response {
    let cookie = Cookie::build((SESSION_COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(cookie::time::Duration::ZERO)
        .build();

    with_cookie(Redirect::to(LOGIN_ROUTE), cookie)
}

fn with_cookie(redirect: Redirect, cookie: Cookie<'_>) -> Response {
    ([(SET_COOKIE, cookie.to_string())], redirect).into_response()
}

fn login_error_url(message: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(message.as_bytes()).collect();
    format!("{LOGIN_ROUTE}?error={encoded}")
}
