use std::sync::LazyLock;

use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use eyre::WrapErr;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::json;
use types::{Category, CategoryFields, CategoryId, Error, Principal, Result};

use crate::CONFIG;

pub static BACKEND_CLIENT: LazyLock<BackendClient> =
    LazyLock::new(|| BackendClient::new(CONFIG.backend_url.clone()));

pub(crate) trait ReqwestExt {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T>;
}

impl ReqwestExt for RequestBuilder {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T> {
        let response = self.send().await.wrap_err("backend request failed")?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .wrap_err("failed to read backend response")?;

        if !status.is_success() {
            return Err(rejection(status, &body));
        }

        serde_json::from_slice::<T>(&body)
            .inspect_err(|error| {
                tracing::debug!(?error, %status, "failed to parse backend response");
            })
            .wrap_err("failed to parse backend response")
            .map_err(Into::into)
    }
}

/// Turn a non-2xx backend response into an error carrying its message.
fn rejection(status: StatusCode, body: &[u8]) -> Error {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        error: Option<String>,
    }

    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("backend request failed")
                .to_string()
        });

    tracing::debug!(%status, %message, "backend rejected request");
    Error::new(message).with_status(status.as_u16())
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub user: Principal,
    pub token: SecretString,
}

/// Client for the business backend's REST API.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: Url,
}

impl BackendClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .wrap_err_with(|| format!("invalid backend path: {path}"))?;
        Ok(self.client.request(method, url))
    }

    fn authed(&self, method: Method, path: &str, token: &SecretString) -> Result<RequestBuilder> {
        Ok(self
            .request(method, path)?
            .bearer_auth(token.expose_secret()))
    }

    pub async fn login(&self, email: &str, password: &SecretString) -> Result<LoginResponse> {
        self.request(Method::POST, "/auth/login")?
            .json(&json!({
                "email": email,
                "password": password.expose_secret(),
            }))
            .try_send()
            .await
    }

    pub async fn list_categories(&self, token: &SecretString) -> Result<Vec<Category>> {
        self.authed(Method::GET, "/categories", token)?
            .try_send()
            .await
    }

    pub async fn create_category(
        &self,
        token: &SecretString,
        fields: &CategoryFields,
    ) -> Result<Category> {
        self.authed(Method::POST, "/categories", token)?
            .json(fields)
            .try_send()
            .await
    }

    pub async fn update_category(
        &self,
        token: &SecretString,
        id: &CategoryId,
        fields: &CategoryFields,
    ) -> Result<Category> {
        self.authed(Method::PUT, &format!("/categories/{id}"), token)?
            .json(fields)
            .try_send()
            .await
    }
}
