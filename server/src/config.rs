use std::sync::LazyLock;

use eyre::WrapErr;
use secrecy::SecretString;
use serde::Deserialize;
use types::Result;
use url::Url;

pub static CONFIG: LazyLock<Config> =
    LazyLock::new(|| Config::load().expect("invalid SuiteDesk configuration"));

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Base URL of the REST backend, e.g. `https://erp.example.com/api/`.
    pub backend_url: Url,
    /// Key for signing session cookies.
    pub session_secret: SecretString,
    #[serde(default = "default_session_ttl_hours")]
    pub session_ttl_hours: u32,
    #[serde(default = "default_secure_cookies")]
    pub secure_cookies: bool,
}

fn default_session_ttl_hours() -> u32 {
    12
}

fn default_secure_cookies() -> bool {
    true
}

impl Config {
    /// Read `suitedesk.toml` if present, then `SUITEDESK_*` environment variables.
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("suitedesk").required(false))
            .add_source(config::Environment::with_prefix("SUITEDESK"))
            .build()
            .wrap_err("failed to read configuration sources")?;

        Ok(settings
            .try_deserialize()
            .wrap_err("invalid configuration")?)
    }
}
